//! Domain definitions for feature vectors, labels and prediction results.

use serde::Serialize;

use crate::input::OverTime;
use crate::model::domain::{Feature, MODEL_FEATURES, SCALED_FEATURES};

/// Standardised continuous features in model order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScaledFeatures(pub [f64; SCALED_FEATURES]);

/// Full model input: scaled features followed by the raw overtime flag.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FeatureVector(pub [f64; MODEL_FEATURES]);

impl FeatureVector {
    pub fn new(scaled: ScaledFeatures, over_time: OverTime) -> Self {
        let [income, age, satisfaction, tenure] = scaled.0;
        Self([income, age, satisfaction, tenure, over_time.as_feature()])
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.0[feature.index()]
    }
}

/// Binary decision. 1 = predicted attrition, 0 = predicted retention.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(into = "u8")]
pub enum Label {
    Retention = 0,
    Attrition = 1,
}

impl Label {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl From<Label> for u8 {
    fn from(value: Label) -> Self {
        value.as_u8()
    }
}

/// Probability and decision produced for one employee.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct PredictionResult {
    pub probability: f64,
    pub label: Label,
}

/// Result of a single inference call plus the values logged alongside it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Prediction {
    pub result: PredictionResult,
    pub logit: f64,
    pub latency_us: u64,
}
