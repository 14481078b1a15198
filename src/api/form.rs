//! Presentation seam between the page and the prediction pipeline.
//!
//! The host implements `FormSource` (current field values) and
//! `PredictionView` (`on_result` / `on_error`). `submit` wires one button
//! press through validation and scoring into exactly one of the two callbacks.

use crate::common::error::AttritionError;
use crate::inference::{self, Label, PredictionResult};
use crate::input::FormValues;

/// Read of the current form state.
pub trait FormSource {
    fn read(&self) -> FormValues;
}

impl FormSource for FormValues {
    fn read(&self) -> FormValues {
        self.clone()
    }
}

/// Rendering callbacks. Each call replaces whatever the view showed before.
pub trait PredictionView {
    fn on_result(&mut self, probability: f64, label: Label);
    fn on_error(&mut self, message: &str);
}

/// Handle one prediction request end to end.
pub fn submit<S, V>(source: &S, view: &mut V)
where
    S: FormSource + ?Sized,
    V: PredictionView + ?Sized,
{
    match inference::predict_form(&source.read()) {
        Ok(prediction) => {
            let PredictionResult { probability, label } = prediction.result;
            view.on_result(probability, label);
        }
        Err(AttritionError::Validation(err)) => view.on_error(err.user_message()),
        Err(other) => view.on_error(&other.user_message()),
    }
}

/// Result text shown to the user, probability to two decimals.
pub fn result_message(probability: f64, label: Label) -> String {
    let verdict = match label {
        Label::Attrition => "LIKELY",
        Label::Retention => "UNLIKELY",
    };
    format!(
        "Prediction: Employee is {verdict} to attrite (Probability: {})",
        two_decimals(probability)
    )
}

/// Two-decimal text where an exact halfway value rounds up (0.625 -> 0.63).
/// Only odd multiples of 1/8 sit exactly halfway; `{:.2}` would send those
/// to the even neighbour.
fn two_decimals(value: f64) -> String {
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        format!("{:.2}", (value * 100.0).ceil() / 100.0)
    } else {
        format!("{value:.2}")
    }
}

/// Styling applied to the result panel.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Tone {
    Likely,
    Unlikely,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Likely => "result-likely",
            Tone::Unlikely => "result-unlikely",
        }
    }
}

impl From<Label> for Tone {
    fn from(label: Label) -> Self {
        match label {
            Label::Attrition => Tone::Likely,
            Label::Retention => Tone::Unlikely,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultPanel {
    pub text: String,
    pub tone: Tone,
}

/// In-memory view holding what a page would display. At most one of the
/// result panel and the error box is visible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextView {
    result: Option<ResultPanel>,
    error: Option<String>,
}

impl TextView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn result(&self) -> Option<&ResultPanel> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whichever message is currently visible.
    pub fn text(&self) -> Option<&str> {
        self.result
            .as_ref()
            .map(|panel| panel.text.as_str())
            .or(self.error.as_deref())
    }
}

impl PredictionView for TextView {
    fn on_result(&mut self, probability: f64, label: Label) {
        self.error = None;
        self.result = Some(ResultPanel {
            text: result_message(probability, label),
            tone: label.into(),
        });
    }

    fn on_error(&mut self, message: &str) {
        self.result = None;
        self.error = Some(message.to_string());
    }
}
