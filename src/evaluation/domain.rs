//! Domain primitives for offline evaluation of the fixed model.

use serde::{Deserialize, Serialize};

use crate::inference::Label;
use crate::input::{FormValues, RawInput};

/// A validated record with its observed outcome.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LabelledSample {
    pub input: RawInput,
    pub actual: Label,
}

/// Wire shape of one labelled record: the form fields plus `attrition` (0/1).
#[derive(Clone, Debug, Deserialize)]
pub struct LabelledRecord {
    #[serde(flatten)]
    pub form: FormValues,
    pub attrition: u8,
}

/// Counts for the positive class (attrition).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct ConfusionMatrix {
    pub tn: u64,
    pub fp: u64,
    #[serde(rename = "fn")]
    pub fn_: u64,
    pub tp: u64,
}

impl ConfusionMatrix {
    pub fn record(&mut self, actual: Label, predicted: Label) {
        match (actual, predicted) {
            (Label::Retention, Label::Retention) => self.tn += 1,
            (Label::Retention, Label::Attrition) => self.fp += 1,
            (Label::Attrition, Label::Retention) => self.fn_ += 1,
            (Label::Attrition, Label::Attrition) => self.tp += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.tn + self.fp + self.fn_ + self.tp
    }
}

/// Summary of evaluation metrics for a particular model.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MetricsCard {
    pub model_id: &'static str,
    pub model_version: &'static str,
    pub samples: u64,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub confusion: ConfusionMatrix,
}
