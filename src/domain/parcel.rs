use crate::domain::measure::{Measurable, MeasurementUnit, Volume};
use crate::domain::money::Cost;
use crate::utils::error::{RatingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A package sent through the mail or a delivery service.
///
/// Invariant: weight and derived volume are strictly positive. A
/// weightless or flat parcel is rejected here even though a zero
/// measurable is valid on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Parcel {
    weight: Measurable,
    volume: Volume,
}

impl Parcel {
    pub fn new(weight: Measurable, volume: Volume) -> Result<Self> {
        if weight.unit() != MeasurementUnit::Kilograms {
            return Err(RatingError::IncompatibleUnit {
                expected: MeasurementUnit::Kilograms,
                actual: weight.unit(),
            });
        }

        if weight.value() <= 0.0 {
            return Err(RatingError::InvalidValue {
                field: "weight".to_string(),
                value: weight.value().to_string(),
                reason: "a parcel must weigh something".to_string(),
            });
        }

        if volume.measure().value() <= 0.0 {
            return Err(RatingError::InvalidValue {
                field: "volume".to_string(),
                value: volume.measure().value().to_string(),
                reason: "a parcel must occupy space".to_string(),
            });
        }

        Ok(Self { weight, volume })
    }

    pub fn weight(&self) -> &Measurable {
        &self.weight
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }
}

impl fmt::Display for Parcel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.weight, self.volume)
    }
}

/// Pricing category of a parcel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParcelCategory {
    Rejected,
    Heavy,
    Small,
    Medium,
    Large,
}

/// Result of validating a parcel: its category and the delivery cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParcelTag {
    pub category: ParcelCategory,
    pub delivery_cost: Cost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_parcel() {
        let parcel = Parcel::new(
            Measurable::kilograms(10.0).unwrap(),
            Volume::from_dimensions(20.0, 5.0, 20.0).unwrap(),
        )
        .unwrap();

        assert_eq!(parcel.weight().value(), 10.0);
        assert_eq!(parcel.volume().measure().value(), 2000.0);
    }

    #[test]
    fn test_zero_weight_rejected() {
        let result = Parcel::new(
            Measurable::kilograms(0.0).unwrap(),
            Volume::from_dimensions(1.0, 1.0, 1.0).unwrap(),
        );

        assert!(matches!(result, Err(RatingError::InvalidValue { .. })));
    }

    #[test]
    fn test_zero_volume_rejected() {
        let result = Parcel::new(
            Measurable::kilograms(1.0).unwrap(),
            Volume::from_dimensions(0.0, 10.0, 10.0).unwrap(),
        );

        assert!(matches!(result, Err(RatingError::InvalidValue { .. })));
    }

    #[test]
    fn test_weight_must_be_in_kilograms() {
        let result = Parcel::new(
            Measurable::centimetres(1.0).unwrap(),
            Volume::from_dimensions(1.0, 1.0, 1.0).unwrap(),
        );

        assert!(matches!(
            result,
            Err(RatingError::IncompatibleUnit { .. })
        ));
    }
}
