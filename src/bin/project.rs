//! Run a single projection from the command line
//!
//! Prints the year-by-year series as a table, CSV, or JSON and can write the
//! growth chart to a PNG file.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use compound_interest::{chart, format, CompoundingFrequency, ProjectionEngine, ProjectionInput, Settings};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "compound-interest", version, about = "Project compound interest growth")]
struct Cli {
    /// Opening balance
    #[arg(long, default_value_t = 0.0)]
    initial_deposit: f64,

    /// Nominal annual rate as a decimal (0.05 = 5%)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    interest_rate: f64,

    /// Amount added every compounding period
    #[arg(long, default_value_t = 0.0)]
    contribution: f64,

    #[arg(long, value_enum, default_value_t = CompoundingFrequency::Monthly)]
    compounding: CompoundingFrequency,

    /// Projection horizon in years
    #[arg(long)]
    years: u32,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Also write the growth chart as PNG to this path
    #[arg(long)]
    chart: Option<PathBuf>,

    #[command(flatten)]
    settings: Settings,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let input = ProjectionInput {
        initial_deposit: cli.initial_deposit,
        interest_rate: cli.interest_rate,
        contribution: cli.contribution,
        compounding_frequency: cli.compounding,
        time_period_years: cli.years,
    };

    let engine = ProjectionEngine::new(cli.settings.projection_config());
    let result = engine.project(&input).context("projection failed")?;

    match cli.format {
        OutputFormat::Table => {
            println!("{:>6} | {:>20} | {:>20} | {:>16}", "Year", "With Interest", "Without Interest", "Interest");
            for point in &result.yearly_series {
                println!(
                    "{:>6} | {:>20} | {:>20} | {:>16}",
                    point.year,
                    format::currency(point.amount_with_interest, 2),
                    format::currency(point.amount_without_interest, 2),
                    format::currency(point.interest_earned(), 2),
                );
            }
            println!();
            println!("Horizon:               {} years", result.horizon_years());
            println!("Final amount:          {}", format::currency(result.final_amount, 2));
            println!("Without interest:      {}", format::currency(result.final_amount_without_interest, 2));
            println!("Difference:            {}", format::currency(result.difference, 2));
        }
        OutputFormat::Csv => {
            result.write_csv(io::stdout().lock()).context("failed to write CSV")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(io::stdout().lock(), &result).context("failed to write JSON")?;
            println!();
        }
    }

    if let Some(path) = &cli.chart {
        let png = chart::render_png(&result.yearly_series, cli.settings.chart_style())
            .context("failed to render chart")?;
        std::fs::write(path, png).with_context(|| format!("failed to write {}", path.display()))?;
        log::info!("chart written to {}", path.display());
    }

    Ok(())
}
