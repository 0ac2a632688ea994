use crate::domain::measure::MeasurementUnit;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RatingError {
    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Incompatible units: expected {expected}, got {actual}")]
    IncompatibleUnit {
        expected: MeasurementUnit,
        actual: MeasurementUnit,
    },

    #[error("Invalid range: lower bound {lower} exceeds upper bound {upper}")]
    InvalidRange { lower: String, upper: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

pub type Result<T> = std::result::Result<T, RatingError>;
