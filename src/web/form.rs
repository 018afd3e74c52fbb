//! Calculator form fields and their conversion into a projection input

use crate::projection::{CompoundingFrequency, ProjectionError, ProjectionInput};
use serde::Deserialize;

/// Raw form submission, every field kept as text until parsed
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectionForm {
    pub initial_deposit: Option<String>,
    pub interest_rate: Option<String>,
    pub contribution: Option<String>,
    pub compounding_type: Option<String>,
    pub time_period_years: Option<String>,
}

impl TryFrom<ProjectionForm> for ProjectionInput {
    type Error = ProjectionError;

    fn try_from(form: ProjectionForm) -> Result<Self, Self::Error> {
        let compounding_frequency = form
            .compounding_type
            .as_deref()
            .map(CompoundingFrequency::from_form_value)
            .unwrap_or(CompoundingFrequency::Monthly);

        Ok(ProjectionInput {
            initial_deposit: parse_number("initial_deposit", form.initial_deposit.as_deref())?,
            interest_rate: parse_number("interest_rate", form.interest_rate.as_deref())?,
            contribution: parse_number("contribution", form.contribution.as_deref())?,
            compounding_frequency,
            time_period_years: parse_years(form.time_period_years.as_deref())?,
        })
    }
}

/// Parse a decimal field; a missing field counts as zero
fn parse_number(field: &'static str, raw: Option<&str>) -> Result<f64, ProjectionError> {
    let Some(raw) = raw else {
        return Ok(0.0);
    };
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ProjectionError::invalid(field, format!("could not convert {:?} to a number", raw)))
}

/// Parse the horizon, accepting decimals and truncating toward zero
fn parse_years(raw: Option<&str>) -> Result<u32, ProjectionError> {
    const FIELD: &str = "time_period_years";

    let years = parse_number(FIELD, raw)?;
    if !years.is_finite() {
        return Err(ProjectionError::invalid(FIELD, format!("must be a finite number (got {})", years)));
    }

    let whole = years.trunc();
    if whole < 0.0 {
        return Err(ProjectionError::invalid(FIELD, format!("must not be negative (got {})", whole)));
    }
    if whole > u32::MAX as f64 {
        return Err(ProjectionError::invalid(FIELD, format!("is too large (got {})", whole)));
    }
    Ok(whole as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(fields: &[(&str, &str)]) -> ProjectionForm {
        let mut form = ProjectionForm::default();
        for (name, value) in fields {
            let value = Some(value.to_string());
            match *name {
                "initial_deposit" => form.initial_deposit = value,
                "interest_rate" => form.interest_rate = value,
                "contribution" => form.contribution = value,
                "compounding_type" => form.compounding_type = value,
                "time_period_years" => form.time_period_years = value,
                other => panic!("unknown field {}", other),
            }
        }
        form
    }

    #[test]
    fn test_full_form() {
        let input = ProjectionInput::try_from(form(&[
            ("initial_deposit", "1000"),
            ("interest_rate", "0.05"),
            ("contribution", "100.50"),
            ("compounding_type", "monthly"),
            ("time_period_years", "10"),
        ]))
        .unwrap();

        assert_eq!(input.initial_deposit, 1000.0);
        assert_eq!(input.interest_rate, 0.05);
        assert_eq!(input.contribution, 100.5);
        assert_eq!(input.compounding_frequency, CompoundingFrequency::Monthly);
        assert_eq!(input.time_period_years, 10);
    }

    #[test]
    fn test_missing_fields_default() {
        let input = ProjectionInput::try_from(ProjectionForm::default()).unwrap();

        assert_eq!(input.initial_deposit, 0.0);
        assert_eq!(input.interest_rate, 0.0);
        assert_eq!(input.contribution, 0.0);
        assert_eq!(input.compounding_frequency, CompoundingFrequency::Monthly);
        assert_eq!(input.time_period_years, 0);
    }

    #[test]
    fn test_other_compounding_is_annual() {
        let input = ProjectionInput::try_from(form(&[("compounding_type", "annually")])).unwrap();
        assert_eq!(input.compounding_frequency, CompoundingFrequency::Annual);
    }

    #[test]
    fn test_non_numeric_rejected() {
        let err = ProjectionInput::try_from(form(&[("initial_deposit", "abc")])).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidInput { field: "initial_deposit", .. }));
        assert!(err.to_string().contains("\"abc\""));
    }

    #[test]
    fn test_empty_value_rejected() {
        let err = ProjectionInput::try_from(form(&[("contribution", "")])).unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidInput { field: "contribution", .. }));
    }

    #[test]
    fn test_whitespace_and_exponent() {
        let input = ProjectionInput::try_from(form(&[
            ("initial_deposit", " 1e3 "),
            ("interest_rate", "\t0.07\n"),
        ]))
        .unwrap();
        assert_eq!(input.initial_deposit, 1000.0);
        assert_eq!(input.interest_rate, 0.07);
    }

    #[test]
    fn test_years_truncated() {
        let input = ProjectionInput::try_from(form(&[("time_period_years", "7.9")])).unwrap();
        assert_eq!(input.time_period_years, 7);

        // Truncation toward zero keeps small negatives at zero
        let input = ProjectionInput::try_from(form(&[("time_period_years", "-0.5")])).unwrap();
        assert_eq!(input.time_period_years, 0);
    }

    #[test]
    fn test_years_out_of_range() {
        assert!(ProjectionInput::try_from(form(&[("time_period_years", "-3")])).is_err());
        assert!(ProjectionInput::try_from(form(&[("time_period_years", "inf")])).is_err());
        assert!(ProjectionInput::try_from(form(&[("time_period_years", "1e20")])).is_err());
        assert!(ProjectionInput::try_from(form(&[("time_period_years", "ten")])).is_err());
    }
}
