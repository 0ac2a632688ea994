#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::engine::ParcelValidator;
pub use crate::core::rules::{standard_rules, ParcelRule};
pub use crate::domain::bound::{BoundKind, MeasurableBound};
pub use crate::domain::measure::{Measurable, MeasurementUnit, Volume};
pub use crate::domain::money::{Cost, Money};
pub use crate::domain::parcel::{Parcel, ParcelCategory, ParcelTag};
pub use crate::domain::ports::{Specification, Validator};
pub use crate::utils::error::{RatingError, Result};
