//! Form values as read from the page and the validated employee record.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Raw field values exactly as the form holds them. JSON callers may send
/// numbers or strings; both are kept as text until validation.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    #[serde(deserialize_with = "field_text")]
    pub monthly_income: String,
    #[serde(deserialize_with = "field_text")]
    pub age: String,
    #[serde(deserialize_with = "field_text")]
    pub job_satisfaction: String,
    #[serde(deserialize_with = "field_text")]
    pub years_at_company: String,
    #[serde(deserialize_with = "field_text")]
    pub over_time: String,
}

impl FormValues {
    pub fn new(
        monthly_income: impl Into<String>,
        age: impl Into<String>,
        job_satisfaction: impl Into<String>,
        years_at_company: impl Into<String>,
        over_time: impl Into<String>,
    ) -> Self {
        Self {
            monthly_income: monthly_income.into(),
            age: age.into(),
            job_satisfaction: job_satisfaction.into(),
            years_at_company: years_at_company.into(),
            over_time: over_time.into(),
        }
    }
}

/// Binary overtime flag, fed to the model unscaled.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum OverTime {
    No = 0,
    Yes = 1,
}

impl OverTime {
    pub fn as_feature(&self) -> f64 {
        match self {
            OverTime::No => 0.0,
            OverTime::Yes => 1.0,
        }
    }
}

impl From<OverTime> for u8 {
    fn from(value: OverTime) -> Self {
        value as u8
    }
}

impl TryFrom<u8> for OverTime {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OverTime::No),
            1 => Ok(OverTime::Yes),
            other => Err(format!("over_time must be 0 or 1, got {other}")),
        }
    }
}

/// Employee attributes after validation; see `input::service::validate`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct RawInput {
    pub monthly_income: f64,
    pub age: f64,
    pub job_satisfaction: f64,
    pub years_at_company: f64,
    pub over_time: OverTime,
}

impl RawInput {
    /// The four continuous attributes in model feature order.
    pub fn continuous(&self) -> [f64; 4] {
        [
            self.monthly_income,
            self.age,
            self.job_satisfaction,
            self.years_at_company,
        ]
    }
}

fn field_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct FieldText;

    impl<'de> Visitor<'de> for FieldText {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a number")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_unit<E: de::Error>(self) -> Result<String, E> {
            Ok(String::new())
        }
    }

    deserializer.deserialize_any(FieldText)
}
