//! Shared utilities that glue the different domains together.
pub mod config;
pub mod error;
pub mod log;
pub mod time;

pub use error::{AttritionError, AttritionResult, ErrorCode, Field, Reason, ValidationError};
