//! Binary crate for the `weather-web` server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and environment overrides
//! - Interactive configuration
//! - Logging setup and starting the HTTP server

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,weather_web=debug,weather_core=debug")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
