use crate::domain::measure::Measurable;
use crate::utils::error::{RatingError, Result};
use serde::Serialize;
use std::cmp::Ordering;

/// Whether an endpoint of a bound is part of the interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BoundKind {
    Inclusive,
    Exclusive,
}

/// An interval over two measurables of the same unit, each endpoint
/// independently inclusive or exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MeasurableBound {
    lower: Measurable,
    upper: Measurable,
    lower_kind: BoundKind,
    upper_kind: BoundKind,
}

impl MeasurableBound {
    pub fn new(
        lower: Measurable,
        upper: Measurable,
        lower_kind: BoundKind,
        upper_kind: BoundKind,
    ) -> Result<Self> {
        if lower.compare_to(&upper)? == Ordering::Greater {
            return Err(RatingError::InvalidRange {
                lower: lower.to_string(),
                upper: upper.to_string(),
            });
        }

        Ok(Self {
            lower,
            upper,
            lower_kind,
            upper_kind,
        })
    }

    pub fn lower(&self) -> &Measurable {
        &self.lower
    }

    pub fn upper(&self) -> &Measurable {
        &self.upper
    }

    pub fn lower_kind(&self) -> BoundKind {
        self.lower_kind
    }

    pub fn upper_kind(&self) -> BoundKind {
        self.upper_kind
    }

    /// Checks whether the value falls within the bounds.
    pub fn contains(&self, value: &Measurable) -> Result<bool> {
        let lower_ord = self.lower.compare_to(value)?;
        let upper_ord = self.upper.compare_to(value)?;

        let above_lower = match self.lower_kind {
            BoundKind::Inclusive => lower_ord != Ordering::Greater,
            BoundKind::Exclusive => lower_ord == Ordering::Less,
        };
        let below_upper = match self.upper_kind {
            BoundKind::Inclusive => upper_ord != Ordering::Less,
            BoundKind::Exclusive => upper_ord == Ordering::Greater,
        };

        Ok(above_lower && below_upper)
    }
}
