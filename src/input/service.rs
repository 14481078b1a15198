//! Validation of form values into a `RawInput`.
//!
//! Fields are checked in form order and the first failure wins. Nothing
//! downstream runs unless every field passes.

use crate::common::error::{Field, Reason, ValidationError};

use super::domain::{FormValues, OverTime, RawInput};

pub const AGE_RANGE: (f64, f64) = (18.0, 65.0);
pub const JOB_SATISFACTION_RANGE: (f64, f64) = (1.0, 4.0);

/// Parse and range-check every field of the form.
pub fn validate(form: &FormValues) -> Result<RawInput, ValidationError> {
    let monthly_income = non_negative(Field::MonthlyIncome, &form.monthly_income)?;
    let age = within(Field::Age, &form.age, AGE_RANGE)?;
    let job_satisfaction = within(
        Field::JobSatisfaction,
        &form.job_satisfaction,
        JOB_SATISFACTION_RANGE,
    )?;
    let years_at_company = non_negative(Field::YearsAtCompany, &form.years_at_company)?;
    let over_time = parse_over_time(&form.over_time)?;

    Ok(RawInput {
        monthly_income,
        age,
        job_satisfaction,
        years_at_company,
        over_time,
    })
}

/// Re-check an already numeric record against the same domain constraints.
pub fn check(input: &RawInput) -> Result<(), ValidationError> {
    finite(Field::MonthlyIncome, input.monthly_income)
        .and_then(|v| at_least_zero(Field::MonthlyIncome, v))?;
    finite(Field::Age, input.age).and_then(|v| in_range(Field::Age, v, AGE_RANGE))?;
    finite(Field::JobSatisfaction, input.job_satisfaction)
        .and_then(|v| in_range(Field::JobSatisfaction, v, JOB_SATISFACTION_RANGE))?;
    finite(Field::YearsAtCompany, input.years_at_company)
        .and_then(|v| at_least_zero(Field::YearsAtCompany, v))?;
    Ok(())
}

fn parse_number(field: Field, raw: &str) -> Result<f64, ValidationError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::new(field, Reason::NotANumber))?;
    finite(field, value)
}

fn finite(field: Field, value: f64) -> Result<f64, ValidationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ValidationError::new(field, Reason::NotFinite))
    }
}

fn non_negative(field: Field, raw: &str) -> Result<f64, ValidationError> {
    parse_number(field, raw).and_then(|v| at_least_zero(field, v))
}

fn at_least_zero(field: Field, value: f64) -> Result<f64, ValidationError> {
    if value < 0.0 {
        Err(ValidationError::new(field, Reason::Negative))
    } else {
        Ok(value)
    }
}

fn within(field: Field, raw: &str, range: (f64, f64)) -> Result<f64, ValidationError> {
    parse_number(field, raw).and_then(|v| in_range(field, v, range))
}

fn in_range(field: Field, value: f64, (min, max): (f64, f64)) -> Result<f64, ValidationError> {
    if value < min || value > max {
        Err(ValidationError::new(field, Reason::OutOfRange { min, max }))
    } else {
        Ok(value)
    }
}

fn parse_over_time(raw: &str) -> Result<OverTime, ValidationError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "0" | "no" => Ok(OverTime::No),
        "1" | "yes" => Ok(OverTime::Yes),
        _ => Err(ValidationError::new(Field::OverTime, Reason::NotBinary)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(mi: &str, age: &str, js: &str, yac: &str, ot: &str) -> FormValues {
        FormValues::new(mi, age, js, yac, ot)
    }

    fn rejected_field(f: FormValues) -> Field {
        validate(&f).unwrap_err().field
    }

    #[test]
    fn accepts_typical_employee() {
        let input = validate(&form("5000", "30", "3", "5", "0")).unwrap();
        assert_eq!(input.monthly_income, 5000.0);
        assert_eq!(input.age, 30.0);
        assert_eq!(input.job_satisfaction, 3.0);
        assert_eq!(input.years_at_company, 5.0);
        assert_eq!(input.over_time, OverTime::No);
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(validate(&form("5000", "18", "3", "5", "0")).is_ok());
        assert!(validate(&form("5000", "65", "3", "5", "0")).is_ok());
        assert_eq!(rejected_field(form("5000", "17", "3", "5", "0")), Field::Age);
        assert_eq!(rejected_field(form("5000", "66", "3", "5", "0")), Field::Age);
    }

    #[test]
    fn job_satisfaction_bounds_are_inclusive() {
        assert!(validate(&form("5000", "30", "1", "5", "0")).is_ok());
        assert!(validate(&form("5000", "30", "4", "5", "0")).is_ok());
        assert_eq!(
            rejected_field(form("5000", "30", "0", "5", "0")),
            Field::JobSatisfaction
        );
        assert_eq!(
            rejected_field(form("5000", "30", "5", "5", "0")),
            Field::JobSatisfaction
        );
    }

    #[test]
    fn income_zero_accepted_negative_rejected() {
        assert!(validate(&form("0", "30", "3", "5", "0")).is_ok());
        let err = validate(&form("-1", "30", "3", "5", "0")).unwrap_err();
        assert_eq!(err, ValidationError::new(Field::MonthlyIncome, Reason::Negative));
    }

    #[test]
    fn negative_tenure_rejected() {
        assert_eq!(
            rejected_field(form("5000", "30", "3", "-0.5", "0")),
            Field::YearsAtCompany
        );
    }

    #[test]
    fn non_numeric_and_non_finite_rejected() {
        let err = validate(&form("", "30", "3", "5", "0")).unwrap_err();
        assert_eq!(err.reason, Reason::NotANumber);
        let err = validate(&form("abc", "30", "3", "5", "0")).unwrap_err();
        assert_eq!(err.reason, Reason::NotANumber);
        let err = validate(&form("inf", "30", "3", "5", "0")).unwrap_err();
        assert_eq!(err.reason, Reason::NotFinite);
        let err = validate(&form("5000", "NaN", "3", "5", "0")).unwrap_err();
        assert_eq!(err.reason, Reason::NotFinite);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let input = validate(&form(" 4200.5 ", "\t40", "2 ", "3", " 1 ")).unwrap();
        assert_eq!(input.monthly_income, 4200.5);
        assert_eq!(input.over_time, OverTime::Yes);
    }

    #[test]
    fn over_time_accepts_flags_and_yes_no() {
        for (raw, expected) in [
            ("0", OverTime::No),
            ("1", OverTime::Yes),
            ("No", OverTime::No),
            ("YES", OverTime::Yes),
        ] {
            assert_eq!(validate(&form("1", "30", "3", "5", raw)).unwrap().over_time, expected);
        }
        assert_eq!(rejected_field(form("1", "30", "3", "5", "2")), Field::OverTime);
        assert_eq!(rejected_field(form("1", "30", "3", "5", "")), Field::OverTime);
    }

    #[test]
    fn first_failing_field_is_reported() {
        assert_eq!(
            rejected_field(form("-1", "99", "9", "-1", "x")),
            Field::MonthlyIncome
        );
    }

    #[test]
    fn check_mirrors_validate() {
        let ok = validate(&form("5000", "30", "3", "5", "1")).unwrap();
        assert!(check(&ok).is_ok());

        let mut bad = ok;
        bad.age = 70.0;
        assert_eq!(check(&bad).unwrap_err().field, Field::Age);

        bad = ok;
        bad.monthly_income = f64::NAN;
        assert_eq!(
            check(&bad).unwrap_err(),
            ValidationError::new(Field::MonthlyIncome, Reason::NotFinite)
        );
    }
}
