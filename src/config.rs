//! Runtime settings shared by the HTTP entry points and the CLI

use crate::chart::ChartStyle;
use crate::projection::{ProjectionConfig, ZeroRatePolicy};
use clap::Args;

#[derive(Debug, Clone, Args)]
pub struct Settings {
    /// Zero interest rate handling: `limit` grows contributions linearly,
    /// `strict` rejects the request
    #[arg(long, env = "COMPOUND_ZERO_RATE", value_enum, default_value_t = ZeroRatePolicy::Limit)]
    pub zero_rate: ZeroRatePolicy,

    /// Chart width in pixels
    #[arg(
        long,
        env = "COMPOUND_CHART_WIDTH",
        default_value_t = 1000,
        value_parser = clap::value_parser!(u32).range(320..=4000)
    )]
    pub chart_width: u32,

    /// Chart height in pixels
    #[arg(
        long,
        env = "COMPOUND_CHART_HEIGHT",
        default_value_t = 500,
        value_parser = clap::value_parser!(u32).range(200..=4000)
    )]
    pub chart_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let chart = ChartStyle::default();
        Self {
            zero_rate: ZeroRatePolicy::default(),
            chart_width: chart.width,
            chart_height: chart.height,
        }
    }
}

impl Settings {
    pub fn projection_config(&self) -> ProjectionConfig {
        ProjectionConfig {
            zero_rate: self.zero_rate,
        }
    }

    pub fn chart_style(&self) -> ChartStyle {
        ChartStyle {
            width: self.chart_width,
            height: self.chart_height,
        }
    }
}
