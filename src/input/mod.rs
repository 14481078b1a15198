//! Input domain: reading form values and validating them into model input.

pub mod domain;
pub mod service;

pub use domain::{FormValues, OverTime, RawInput};
pub use service::validate;
