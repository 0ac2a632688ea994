use crate::domain::bound::{BoundKind, MeasurableBound};
use crate::domain::measure::Measurable;
use crate::domain::money::{Cost, Money};
use crate::domain::parcel::{Parcel, ParcelCategory, ParcelTag};
use crate::domain::ports::Specification;
use crate::utils::error::{RatingError, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A single pricing rule. Weight rules test and charge by the parcel's
/// weight, volume rules by its derived volume; the unbounded variant
/// matches every parcel and charges by volume (the catch-all).
#[derive(Debug, Clone, PartialEq)]
pub enum ParcelRule {
    Weight {
        bound: MeasurableBound,
        category: ParcelCategory,
        rate: Money,
    },
    Volume {
        bound: MeasurableBound,
        category: ParcelCategory,
        rate: Money,
    },
    Unbounded {
        category: ParcelCategory,
        rate: Money,
    },
}

impl ParcelRule {
    pub fn category(&self) -> ParcelCategory {
        match self {
            ParcelRule::Weight { category, .. }
            | ParcelRule::Volume { category, .. }
            | ParcelRule::Unbounded { category, .. } => *category,
        }
    }

    /// Produces the tag for a parcel that satisfied this rule.
    ///
    /// The result is meaningless for a parcel that did not satisfy the
    /// rule; the validator only calls this after a positive check.
    pub fn generate_tag(&self, parcel: &Parcel) -> Result<ParcelTag> {
        let delivery_cost = match self {
            ParcelRule::Weight { category, rate, .. } => {
                if *category == ParcelCategory::Rejected {
                    Cost::NotApplicable
                } else {
                    charge(parcel.weight(), rate)?
                }
            }
            ParcelRule::Volume { rate, .. } | ParcelRule::Unbounded { rate, .. } => {
                charge(parcel.volume().measure(), rate)?
            }
        };

        Ok(ParcelTag {
            category: self.category(),
            delivery_cost,
        })
    }
}

impl Specification<Parcel> for ParcelRule {
    fn is_satisfied_by(&self, parcel: &Parcel) -> Result<bool> {
        match self {
            ParcelRule::Weight { bound, .. } => bound.contains(parcel.weight()),
            ParcelRule::Volume { bound, .. } => bound.contains(parcel.volume().measure()),
            ParcelRule::Unbounded { .. } => Ok(true),
        }
    }
}

fn charge(measurable: &Measurable, rate: &Money) -> Result<Cost> {
    let quantity =
        Decimal::from_f64_retain(measurable.value()).ok_or_else(|| RatingError::InvalidValue {
            field: "measurable".to_string(),
            value: measurable.value().to_string(),
            reason: "not representable as a decimal amount".to_string(),
        })?;

    Ok(Cost::Amount(Money::new(quantity * rate.value())?))
}

/// The standard ordered rule list. First match wins, so the weight
/// rules take priority over the volume rules, and the unbounded large
/// rule catches everything else.
pub fn standard_rules() -> Result<Vec<ParcelRule>> {
    Ok(vec![
        // Over 50 kg: refused outright, no charge applies.
        ParcelRule::Weight {
            bound: MeasurableBound::new(
                Measurable::kilograms(50.0)?,
                Measurable::kilograms(f64::MAX)?,
                BoundKind::Exclusive,
                BoundKind::Inclusive,
            )?,
            category: ParcelCategory::Rejected,
            rate: Money::zero(),
        },
        // Over 10 kg and up to 50 kg: charged per kilogram.
        ParcelRule::Weight {
            bound: MeasurableBound::new(
                Measurable::kilograms(10.0)?,
                Measurable::kilograms(50.0)?,
                BoundKind::Exclusive,
                BoundKind::Inclusive,
            )?,
            category: ParcelCategory::Heavy,
            rate: Money::new(dec!(15))?,
        },
        // Under 1500 cm3.
        ParcelRule::Volume {
            bound: MeasurableBound::new(
                Measurable::cubic_centimetres(0.0)?,
                Measurable::cubic_centimetres(1500.0)?,
                BoundKind::Exclusive,
                BoundKind::Exclusive,
            )?,
            category: ParcelCategory::Small,
            rate: Money::new(dec!(0.05))?,
        },
        // From 1500 up to but not including 2500 cm3.
        ParcelRule::Volume {
            bound: MeasurableBound::new(
                Measurable::cubic_centimetres(1500.0)?,
                Measurable::cubic_centimetres(2500.0)?,
                BoundKind::Inclusive,
                BoundKind::Exclusive,
            )?,
            category: ParcelCategory::Medium,
            rate: Money::new(dec!(0.04))?,
        },
        // Everything else.
        ParcelRule::Unbounded {
            category: ParcelCategory::Large,
            rate: Money::new(dec!(0.03))?,
        },
    ])
}
