use crate::core::rules::{standard_rules, ParcelRule};
use crate::domain::parcel::{Parcel, ParcelTag};
use crate::domain::ports::{Specification, Validator};
use crate::utils::error::{RatingError, Result};

/// Evaluates a parcel against an ordered rule list, first match wins.
///
/// The list is fixed at construction, so a validator can be shared
/// read-only across threads; each `validate` call is independent.
#[derive(Debug, Clone)]
pub struct ParcelValidator {
    rules: Vec<ParcelRule>,
}

impl ParcelValidator {
    /// Validator with the standard hard-coded rule list.
    pub fn standard() -> Result<Self> {
        Ok(Self {
            rules: standard_rules()?,
        })
    }

    /// Validator with a caller-supplied rule list. The list order
    /// encodes priority; the caller is responsible for ending it with
    /// a rule that always matches.
    pub fn with_rules(rules: Vec<ParcelRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[ParcelRule] {
        &self.rules
    }
}

impl Validator<Parcel> for ParcelValidator {
    type Outcome = ParcelTag;

    fn validate(&self, parcel: &Parcel) -> Result<ParcelTag> {
        if self.rules.is_empty() {
            return Err(RatingError::Configuration {
                message: "validator has no rules to apply".to_string(),
            });
        }

        for rule in &self.rules {
            if rule.is_satisfied_by(parcel)? {
                tracing::debug!("parcel {} matched the {:?} rule", parcel, rule.category());
                return rule.generate_tag(parcel);
            }
        }

        Err(RatingError::Configuration {
            message: "no rule matched the parcel; the rule list must end with an unbounded rule"
                .to_string(),
        })
    }
}
