//! AWS Lambda entry point
//!
//! Serves the same router as the local server behind API Gateway / function
//! URLs. Settings come from the environment only.

use clap::Parser;
use compound_interest::{web, Settings};

#[derive(Debug, Parser)]
#[command(name = "compound-interest-lambda")]
struct Cli {
    #[command(flatten)]
    settings: Settings,
}

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    // CloudWatch stamps each line already
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    log::info!(
        "starting lambda handler (zero rate: {:?}, chart {}x{})",
        cli.settings.zero_rate,
        cli.settings.chart_width,
        cli.settings.chart_height
    );

    lambda_http::run(web::router(&cli.settings)).await
}
