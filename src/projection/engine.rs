//! Core projection engine
//!
//! Closed-form evaluation per year `t` with `n` periods per year:
//! - growth factor `g(t) = (1 + r/n)^(n*t)`
//! - principal grows to `deposit * g(t)`
//! - contributions are an ordinary annuity: `c * (g(t) - 1) / (r/n)`
//! - without interest the balance is `deposit + c * n * t`

use super::{ProjectionError, ProjectionInput, ProjectionResult, YearlyPoint};
use serde::{Deserialize, Serialize};

/// Handling of the annuity term when the interest rate is exactly zero
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ZeroRatePolicy {
    /// Use the limit as r -> 0, contributions accumulate linearly (`c * n * t`)
    #[default]
    Limit,
    /// Refuse to divide by a zero periodic rate when contributions are present
    Strict,
}

/// Projection configuration
#[derive(Debug, Clone, Default)]
pub struct ProjectionConfig {
    pub zero_rate: ZeroRatePolicy,
}

/// Projection engine
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    config: ProjectionConfig,
}

impl ProjectionEngine {
    pub fn new(config: ProjectionConfig) -> Self {
        Self { config }
    }

    /// Run a projection over the full horizon
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
        input.validate()?;

        let rate = input.periodic_rate();
        if rate == 0.0
            && input.contribution > 0.0
            && self.config.zero_rate == ZeroRatePolicy::Strict
        {
            return Err(ProjectionError::DivisionByZero);
        }

        let series = (0..=input.time_period_years)
            .map(|year| self.project_year(input, year))
            .collect::<Result<Vec<_>, _>>()?;

        // Range 0..=T always yields at least year 0
        ProjectionResult::from_series(series).ok_or_else(|| {
            ProjectionError::invalid("time_period_years", "projection produced no years")
        })
    }

    /// Balances at the end of a given year
    fn project_year(
        &self,
        input: &ProjectionInput,
        year: u32,
    ) -> Result<YearlyPoint, ProjectionError> {
        let n = input.periods_per_year() as f64;
        let periods = n * year as f64;
        let rate = input.periodic_rate();
        let growth = (1.0 + rate).powf(periods);

        let compounded_principal = input.initial_deposit * growth;
        let compounded_contributions = if rate == 0.0 {
            // Strict mode has already rejected positive contributions here
            input.contribution * periods
        } else {
            input.contribution * (growth - 1.0) / rate
        };

        let amount_with_interest = compounded_principal + compounded_contributions;
        let amount_without_interest = input.initial_deposit + input.contribution * periods;

        if !amount_with_interest.is_finite() || !amount_without_interest.is_finite() {
            return Err(ProjectionError::Overflow { year });
        }

        Ok(YearlyPoint {
            year,
            amount_with_interest,
            amount_without_interest,
        })
    }
}

/// Run a projection with the default configuration
pub fn compute(input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
    ProjectionEngine::default().project(input)
}
