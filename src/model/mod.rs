//! Model domain: feature order, scaler and weight tables, the built-in artefact.

pub mod domain;
pub mod params;

pub use domain::{Feature, LogisticModel, ModelParams, ScalingParams};
pub use params::{builtin, DECISION_THRESHOLD};
