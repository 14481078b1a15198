//! Inference domain: the deterministic scoring pipeline.

pub mod domain;
pub mod service;

pub use domain::{Label, Prediction, PredictionResult};
pub use service::{predict, predict_form, predict_with};
