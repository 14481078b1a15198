//! Employee attrition predictor: validate form input, standardise it, score it
//! with a fixed logistic model and hand the decision to a presentation layer.
pub mod api;
pub mod common;
pub mod evaluation;
pub mod inference;
pub mod input;
pub mod model;

pub use api::ffi::{attrition_free_str, attrition_predict, attrition_predict_json};
pub use common::{AttritionError, AttritionResult, ValidationError};
pub use inference::{Label, PredictionResult};
