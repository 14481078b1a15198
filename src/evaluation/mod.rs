//! Offline evaluation of the built-in model against labelled records.

pub mod domain;
pub mod service;

pub use domain::{ConfusionMatrix, LabelledSample, MetricsCard};
pub use service::{evaluate, evaluate_json};
