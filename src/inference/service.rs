//! The prediction pipeline: scale, score, squash, decide.
//!
//! Every stage after validation is pure and infallible.

use crate::common::error::{AttritionResult, ErrorCode};
use crate::common::log;
use crate::common::time::Stopwatch;
use crate::input::{self, FormValues, RawInput};
use crate::model::domain::{Feature, LogisticModel, ModelParams, ScalingParams, SCALED_FEATURES};
use crate::model::params;

use super::domain::{FeatureVector, Label, Prediction, PredictionResult, ScaledFeatures};

/// `(value - mean) / scale` for each continuous attribute, order preserved.
pub fn scale(scaler: &ScalingParams, input: &RawInput) -> ScaledFeatures {
    let raw = input.continuous();
    let mut out = [0.0; SCALED_FEATURES];
    for feature in Feature::ALL.iter().filter(|f| f.is_scaled()) {
        let i = feature.index();
        out[i] = (raw[i] - scaler.mean[i]) / scaler.scale[i];
    }
    ScaledFeatures(out)
}

/// Logit: intercept plus the weighted sum of the feature vector.
pub fn score(params: &ModelParams, features: &FeatureVector) -> f64 {
    Feature::ALL.iter().fold(params.intercept, |z, feature| {
        z + params.coefficient(*feature) * features.get(*feature)
    })
}

/// Logistic function.
pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Ties at the threshold resolve to attrition.
pub fn decide(probability: f64, threshold: f64) -> Label {
    if probability >= threshold {
        Label::Attrition
    } else {
        Label::Retention
    }
}

/// Run a validated record through `model`.
pub fn predict_with(model: &LogisticModel, input: &RawInput) -> Prediction {
    let timer = Stopwatch::start();
    let scaled = scale(&model.scaler, input);
    let features = FeatureVector::new(scaled, input.over_time);
    let logit = score(&model.params, &features);
    let probability = sigmoid(logit);
    let label = decide(probability, model.threshold);

    Prediction {
        result: PredictionResult { probability, label },
        logit,
        latency_us: timer.elapsed_us(),
    }
}

/// Run a validated record through the built-in model.
pub fn predict(input: &RawInput) -> Prediction {
    predict_with(params::builtin(), input)
}

/// Validate form values, then predict. Both outcomes are logged.
pub fn predict_form(form: &FormValues) -> AttritionResult<Prediction> {
    let timer = Stopwatch::start();
    let input = match input::validate(form) {
        Ok(input) => input,
        Err(err) => {
            tracing::debug!(field = %err.field, reason = %err.reason, "form rejected");
            log::event("inference", "rejected", ErrorCode::InvalidInput, timer.elapsed_us());
            return Err(err.into());
        }
    };

    let prediction = predict(&input);
    tracing::debug!(
        logit = prediction.logit,
        probability = prediction.result.probability,
        label = prediction.result.label.as_u8(),
        "prediction computed"
    );
    log::event("inference", "predicted", ErrorCode::Ok, timer.elapsed_us());
    Ok(prediction)
}

/// Predict every record in order.
pub fn batch_predict(model: &LogisticModel, inputs: &[RawInput]) -> Vec<Prediction> {
    inputs.iter().map(|input| predict_with(model, input)).collect()
}
