//! Serve the calculator over HTTP on a local socket

use anyhow::Context;
use clap::Parser;
use compound_interest::{web, Settings};
use std::net::SocketAddr;
use tokio::net::TcpListener;

#[derive(Debug, Parser)]
#[command(name = "compound-interest-serve", version, about = "Compound interest calculator web server")]
struct Cli {
    /// Address to listen on
    #[arg(long, env = "COMPOUND_BIND", default_value = "127.0.0.1:5000")]
    bind: SocketAddr,

    #[command(flatten)]
    settings: Settings,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    log::debug!("settings: {:?}", cli.settings);

    let app = web::router(&cli.settings);
    let listener = TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("failed to bind {}", cli.bind))?;
    log::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated")?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        log::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }
    log::info!("shutdown requested");
}
