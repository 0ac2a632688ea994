pub mod engine;
pub mod rules;

pub use crate::domain::parcel::{Parcel, ParcelCategory, ParcelTag};
pub use crate::domain::ports::{Specification, Validator};
pub use crate::utils::error::Result;
