//! Projection inputs and their validation

use super::{ProjectionError, MAX_HORIZON_YEARS};
use serde::{Deserialize, Serialize};

/// How often interest is credited (and contributions made) each year
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    #[default]
    Monthly,
    Annual,
}

impl CompoundingFrequency {
    /// Compounding periods per year
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Annual => 1,
        }
    }

    /// Map the form's `compounding_type` value.
    /// Only the literal "monthly" selects monthly, anything else is annual.
    pub fn from_form_value(value: &str) -> Self {
        if value == "monthly" {
            CompoundingFrequency::Monthly
        } else {
            CompoundingFrequency::Annual
        }
    }
}

/// Parameters for a single projection.
/// Missing JSON fields default to zero, like missing form fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Opening balance (currency units)
    #[serde(default)]
    pub initial_deposit: f64,

    /// Nominal annual rate as a decimal fraction (0.05 = 5%)
    #[serde(default)]
    pub interest_rate: f64,

    /// Amount added at the end of every compounding period
    #[serde(default)]
    pub contribution: f64,

    #[serde(default)]
    pub compounding_frequency: CompoundingFrequency,

    /// Projection horizon in whole years
    #[serde(default)]
    pub time_period_years: u32,
}

impl ProjectionInput {
    /// Check ranges before any arithmetic is attempted
    pub fn validate(&self) -> Result<(), ProjectionError> {
        require_finite("initial_deposit", self.initial_deposit)?;
        require_finite("interest_rate", self.interest_rate)?;
        require_finite("contribution", self.contribution)?;

        if self.initial_deposit < 0.0 {
            return Err(ProjectionError::invalid(
                "initial_deposit",
                format!("must not be negative (got {})", self.initial_deposit),
            ));
        }
        if self.contribution < 0.0 {
            return Err(ProjectionError::invalid(
                "contribution",
                format!("must not be negative (got {})", self.contribution),
            ));
        }

        // 1 + r/n must stay positive or the growth factor flips sign
        if 1.0 + self.periodic_rate() <= 0.0 {
            return Err(ProjectionError::invalid(
                "interest_rate",
                format!(
                    "must be greater than -{} for {} compounding (got {})",
                    self.periods_per_year(),
                    self.frequency_label(),
                    self.interest_rate
                ),
            ));
        }

        if self.time_period_years > MAX_HORIZON_YEARS {
            return Err(ProjectionError::invalid(
                "time_period_years",
                format!(
                    "must be at most {} (got {})",
                    MAX_HORIZON_YEARS, self.time_period_years
                ),
            ));
        }

        Ok(())
    }

    pub fn periods_per_year(&self) -> u32 {
        self.compounding_frequency.periods_per_year()
    }

    /// Interest rate applied each compounding period (r / n)
    pub fn periodic_rate(&self) -> f64 {
        self.interest_rate / self.periods_per_year() as f64
    }

    fn frequency_label(&self) -> &'static str {
        match self.compounding_frequency {
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Annual => "annual",
        }
    }
}

fn require_finite(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::invalid(
            field,
            format!("must be a finite number (got {})", value),
        ))
    }
}
