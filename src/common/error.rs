//! Error handling primitives shared across the core.
//!
//! Validation failures carry the offending field for logs, while the text
//! shown to the person filling in the form is always the same fixed message.

use std::fmt;

use thiserror::Error;

/// Message rendered whenever any form field fails validation.
pub const VALIDATION_MESSAGE: &str =
    "Please enter valid numerical values for all fields. Age must be between 18-65, Job Satisfaction 1-4.";

/// Stable error codes that cross the FFI boundary.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorCode {
    /// Success code used as a sentinel.
    Ok = 0,
    /// Input failed validation.
    InvalidInput = 1,
    /// Runtime configuration could not be loaded.
    Config = 2,
    /// Catch-all for bugs and IO failures.
    Internal = 3,
}

/// Form field a validation failure refers to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Field {
    MonthlyIncome,
    Age,
    JobSatisfaction,
    YearsAtCompany,
    OverTime,
    Attrition,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::MonthlyIncome => "monthly_income",
            Field::Age => "age",
            Field::JobSatisfaction => "job_satisfaction",
            Field::YearsAtCompany => "years_at_company",
            Field::OverTime => "over_time",
            Field::Attrition => "attrition",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a field was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum Reason {
    #[error("not a number")]
    NotANumber,
    #[error("not a finite number")]
    NotFinite,
    #[error("must not be negative")]
    Negative,
    #[error("must be between {min} and {max}")]
    OutOfRange { min: f64, max: f64 },
    #[error("must be 0 or 1")]
    NotBinary,
}

/// The single user-facing error kind of the prediction pipeline.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    pub field: Field,
    pub reason: Reason,
}

impl ValidationError {
    pub const fn new(field: Field, reason: Reason) -> Self {
        Self { field, reason }
    }

    /// Text shown in place of a prediction.
    pub fn user_message(&self) -> &'static str {
        VALIDATION_MESSAGE
    }
}

/// Canonical error type for the core.
#[derive(Debug, Error)]
pub enum AttritionError {
    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),
    #[error("evaluation requires at least one labelled sample")]
    EmptyEvaluationSet,
    #[error("configuration error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type AttritionResult<T> = Result<T, AttritionError>;

impl AttritionError {
    /// Configuration helper.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Machine parsable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AttritionError::Validation(_)
            | AttritionError::EmptyEvaluationSet
            | AttritionError::Json(_) => ErrorCode::InvalidInput,
            AttritionError::Config(_) => ErrorCode::Config,
            AttritionError::Io(_) => ErrorCode::Internal,
        }
    }

    /// Text safe to hand back to a caller across the ABI.
    pub fn user_message(&self) -> String {
        match self {
            AttritionError::Validation(err) => err.user_message().to_string(),
            other => other.to_string(),
        }
    }
}
