use crate::utils::error::{RatingError, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Unit of measurement. Only the basic units needed for parcel rating
/// are supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MeasurementUnit {
    Kilograms,
    Centimetres,
    CubicCentimetres,
}

impl fmt::Display for MeasurementUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            MeasurementUnit::Kilograms => "kg",
            MeasurementUnit::Centimetres => "cm",
            MeasurementUnit::CubicCentimetres => "cm3",
        };
        write!(f, "{}", symbol)
    }
}

/// A nonnegative scalar tagged with its unit of measurement.
///
/// Ordering is only defined between measurables of the same unit;
/// comparing across units is an error, never a silent coercion.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Measurable {
    unit: MeasurementUnit,
    value: f64,
}

impl Measurable {
    pub fn new(unit: MeasurementUnit, value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(RatingError::InvalidValue {
                field: "measurable".to_string(),
                value: value.to_string(),
                reason: "measurements must be finite and non-negative".to_string(),
            });
        }

        Ok(Self { unit, value })
    }

    pub fn kilograms(value: f64) -> Result<Self> {
        Self::new(MeasurementUnit::Kilograms, value)
    }

    pub fn centimetres(value: f64) -> Result<Self> {
        Self::new(MeasurementUnit::Centimetres, value)
    }

    pub fn cubic_centimetres(value: f64) -> Result<Self> {
        Self::new(MeasurementUnit::CubicCentimetres, value)
    }

    pub fn unit(&self) -> MeasurementUnit {
        self.unit
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Three-way comparison against another measurable of the same unit.
    pub fn compare_to(&self, other: &Measurable) -> Result<Ordering> {
        if self.unit != other.unit {
            return Err(RatingError::IncompatibleUnit {
                expected: self.unit,
                actual: other.unit,
            });
        }

        Ok(self.value.total_cmp(&other.value))
    }
}

impl PartialEq for Measurable {
    fn eq(&self, other: &Self) -> bool {
        self.unit == other.unit && self.value == other.value
    }
}

impl fmt::Display for Measurable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}

/// Volume of a parcel, derived from its three linear dimensions.
///
/// The dimensions are kept for display only; rules consult the derived
/// cubic measure exclusively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Volume {
    height: Measurable,
    width: Measurable,
    depth: Measurable,
    measure: Measurable,
}

impl Volume {
    pub fn from_dimensions(height: f64, width: f64, depth: f64) -> Result<Self> {
        let height = Measurable::centimetres(height)?;
        let width = Measurable::centimetres(width)?;
        let depth = Measurable::centimetres(depth)?;

        let measure =
            Measurable::cubic_centimetres(height.value() * width.value() * depth.value())?;

        Ok(Self {
            height,
            width,
            depth,
            measure,
        })
    }

    pub fn height(&self) -> &Measurable {
        &self.height
    }

    pub fn width(&self) -> &Measurable {
        &self.width
    }

    pub fn depth(&self) -> &Measurable {
        &self.depth
    }

    pub fn measure(&self) -> &Measurable {
        &self.measure
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} x {}", self.height, self.width, self.depth)
    }
}
