//! Compiled-in scaler and model constants.
//!
//! Fitted offline on the employee dataset (70/30 stratified split, liblinear
//! solver). Treated as configuration: nothing in this crate re-derives them.

use super::domain::{LogisticModel, ModelParams, ScalingParams};

/// Probabilities at or above this value are labelled as attrition.
pub const DECISION_THRESHOLD: f64 = 0.5;

pub const SCALER: ScalingParams = ScalingParams {
    mean: [
        11821.532334384858,
        44.66482649842271,
        2.7365930599369084,
        10.25,
    ],
    scale: [
        6595.934337666604,
        16.561627365543934,
        1.0627111339746103,
        7.673531364125289,
    ],
};

pub const PARAMS: ModelParams = ModelParams {
    coefficients: [
        0.07802448002322687,
        -0.045510965656840756,
        0.014831561790689245,
        0.07534853498017176,
        0.10147590621360404,
    ],
    intercept: -0.04976518020575292,
};

static BUILTIN: LogisticModel = LogisticModel {
    id: "attrition-logreg",
    version: "1",
    scaler: SCALER,
    params: PARAMS,
    threshold: DECISION_THRESHOLD,
};

/// The process-wide model every prediction runs against.
pub fn builtin() -> &'static LogisticModel {
    &BUILTIN
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::domain::Feature;

    #[test]
    fn scales_are_non_zero() {
        assert!(SCALER.scale.iter().all(|s| *s != 0.0 && s.is_finite()));
    }

    #[test]
    fn overtime_weight_is_positive() {
        assert!(PARAMS.coefficient(Feature::OverTime) > 0.0);
        assert!((PARAMS.coefficient(Feature::OverTime) - 0.1015).abs() < 1e-4);
    }

    #[test]
    fn builtin_uses_fixed_threshold() {
        let model = builtin();
        assert_eq!(model.threshold, 0.5);
        assert_eq!(model.scaler, SCALER);
        assert_eq!(model.params, PARAMS);
        assert_eq!(model.id, "attrition-logreg");
    }
}
