//! Evaluation services: run the fixed model over labelled records and
//! summarise how well it separates attrition from retention.

use crate::common::error::{AttritionError, AttritionResult, Field, Reason, ValidationError};
use crate::inference::service::batch_predict;
use crate::inference::Label;
use crate::input;
use crate::model::domain::LogisticModel;
use crate::model::params;

use super::domain::{ConfusionMatrix, LabelledRecord, LabelledSample, MetricsCard};

/// Evaluate `model` against labelled samples. Metrics are for the attrition class.
pub fn evaluate(model: &LogisticModel, samples: &[LabelledSample]) -> AttritionResult<MetricsCard> {
    if samples.is_empty() {
        return Err(AttritionError::EmptyEvaluationSet);
    }

    let inputs = samples
        .iter()
        .map(|sample| input::service::check(&sample.input).map(|_| sample.input))
        .collect::<Result<Vec<_>, _>>()?;

    let mut confusion = ConfusionMatrix::default();
    for (sample, prediction) in samples.iter().zip(batch_predict(model, &inputs)) {
        confusion.record(sample.actual, prediction.result.label);
    }

    let precision = ratio(confusion.tp, confusion.tp + confusion.fp);
    let recall = ratio(confusion.tp, confusion.tp + confusion.fn_);
    let f1 = if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * precision * recall / (precision + recall)
    };

    let card = MetricsCard {
        model_id: model.id,
        model_version: model.version,
        samples: confusion.total(),
        accuracy: ratio(confusion.tp + confusion.tn, confusion.total()),
        precision,
        recall,
        f1,
        confusion,
    };
    tracing::info!(
        samples = card.samples,
        accuracy = card.accuracy,
        f1 = card.f1,
        "evaluation finished"
    );
    Ok(card)
}

/// Parse a JSON array of labelled form records, validate each one, and
/// evaluate the built-in model.
pub fn evaluate_json(raw: &str) -> AttritionResult<MetricsCard> {
    let records: Vec<LabelledRecord> = serde_json::from_str(raw)?;
    let samples = records
        .iter()
        .map(to_sample)
        .collect::<AttritionResult<Vec<_>>>()?;
    evaluate(params::builtin(), &samples)
}

fn to_sample(record: &LabelledRecord) -> AttritionResult<LabelledSample> {
    let input = input::validate(&record.form)?;
    let actual = match record.attrition {
        0 => Label::Retention,
        1 => Label::Attrition,
        _ => {
            return Err(ValidationError::new(Field::Attrition, Reason::NotBinary).into());
        }
    };
    Ok(LabelledSample { input, actual })
}

fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 {
        0.0
    } else {
        num as f64 / den as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::ErrorCode;
    use crate::input::{OverTime, RawInput};

    fn sample(mi: f64, age: f64, yac: f64, over_time: OverTime, actual: Label) -> LabelledSample {
        LabelledSample {
            input: RawInput {
                monthly_income: mi,
                age,
                job_satisfaction: 3.0,
                years_at_company: yac,
                over_time,
            },
            actual,
        }
    }

    #[test]
    fn empty_set_is_rejected() {
        let err = evaluate(params::builtin(), &[]).unwrap_err();
        assert!(matches!(err, AttritionError::EmptyEvaluationSet));
    }

    #[test]
    fn metrics_follow_confusion_counts() {
        // predicted: attrition, attrition, retention, retention
        let samples = [
            sample(30000.0, 20.0, 40.0, OverTime::Yes, Label::Attrition),
            sample(30000.0, 20.0, 40.0, OverTime::Yes, Label::Retention),
            sample(5000.0, 30.0, 5.0, OverTime::No, Label::Attrition),
            sample(5000.0, 30.0, 5.0, OverTime::No, Label::Retention),
        ];
        let card = evaluate(params::builtin(), &samples).unwrap();
        assert_eq!(
            card.confusion,
            ConfusionMatrix {
                tn: 1,
                fp: 1,
                fn_: 1,
                tp: 1
            }
        );
        assert_eq!(card.samples, 4);
        assert_eq!(card.accuracy, 0.5);
        assert_eq!(card.precision, 0.5);
        assert_eq!(card.recall, 0.5);
        assert_eq!(card.f1, 0.5);
        assert_eq!(card.model_id, "attrition-logreg");
    }

    #[test]
    fn out_of_domain_sample_is_rejected() {
        let samples = [sample(5000.0, 70.0, 5.0, OverTime::No, Label::Retention)];
        match evaluate(params::builtin(), &samples).unwrap_err() {
            AttritionError::Validation(v) => assert_eq!(v.field, Field::Age),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn no_positive_predictions_gives_zero_precision() {
        let samples = [sample(5000.0, 30.0, 5.0, OverTime::No, Label::Attrition)];
        let card = evaluate(params::builtin(), &samples).unwrap();
        assert_eq!(card.precision, 0.0);
        assert_eq!(card.recall, 0.0);
        assert_eq!(card.f1, 0.0);
        assert_eq!(card.accuracy, 0.0);
    }

    #[test]
    fn json_records_are_validated_and_scored() {
        let card = evaluate_json(
            r#"[
                {"monthly_income": 30000, "age": 20, "job_satisfaction": 4, "years_at_company": 40, "over_time": "Yes", "attrition": 1},
                {"monthly_income": "5000", "age": "30", "job_satisfaction": "3", "years_at_company": "5", "over_time": "0", "attrition": 0}
            ]"#,
        )
        .unwrap();
        assert_eq!(card.accuracy, 1.0);
        assert_eq!(card.confusion.tp, 1);
        assert_eq!(card.confusion.tn, 1);

        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["confusion"]["fn"], 0);
        assert_eq!(json["samples"], 2);
    }

    #[test]
    fn invalid_json_record_fails_whole_batch() {
        let err = evaluate_json(
            r#"[{"monthly_income": -1, "age": 30, "job_satisfaction": 3, "years_at_company": 5, "over_time": 0, "attrition": 1}]"#,
        )
        .unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidInput);

        let err = evaluate_json(
            r#"[{"monthly_income": 1, "age": 30, "job_satisfaction": 3, "years_at_company": 5, "over_time": 0, "attrition": 3}]"#,
        )
        .unwrap_err();
        match err {
            AttritionError::Validation(v) => assert_eq!(v.field, Field::Attrition),
            other => panic!("unexpected error {other:?}"),
        }

        assert!(matches!(
            evaluate_json("not json").unwrap_err(),
            AttritionError::Json(_)
        ));
    }
}
