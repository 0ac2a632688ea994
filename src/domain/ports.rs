use crate::utils::error::Result;

/// A rule that a subject either satisfies or does not.
pub trait Specification<T> {
    fn is_satisfied_by(&self, subject: &T) -> Result<bool>;
}

/// Evaluates an entity against a set of rules and produces an outcome.
pub trait Validator<T> {
    type Outcome;

    fn validate(&self, entity: &T) -> Result<Self::Outcome>;
}
