use crate::utils::error::{RatingError, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// A nonnegative monetary amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Money {
    value: Decimal,
}

impl Money {
    pub fn new(value: Decimal) -> Result<Self> {
        if value < Decimal::ZERO {
            return Err(RatingError::InvalidValue {
                field: "money".to_string(),
                value: value.to_string(),
                reason: "amounts cannot be negative".to_string(),
            });
        }

        Ok(Self { value })
    }

    pub fn zero() -> Self {
        Self {
            value: Decimal::ZERO,
        }
    }

    pub fn value(&self) -> Decimal {
        self.value
    }
}

/// Outcome cost of rating a parcel.
///
/// `NotApplicable` marks a parcel that will not be delivered at all,
/// as opposed to one delivered free of charge (`Amount` of zero).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Cost {
    NotApplicable,
    Amount(Money),
}

impl Cost {
    /// Decimal value of the cost; `NotApplicable` reports zero.
    pub fn value(&self) -> Decimal {
        match self {
            Cost::NotApplicable => Decimal::ZERO,
            Cost::Amount(money) => money.value(),
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, Cost::Amount(_))
    }
}
