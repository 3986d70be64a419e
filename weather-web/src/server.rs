use anyhow::Context;
use weather_core::{Config, WeatherService};

use crate::{routes::router, state::AppState};

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: &Config) -> anyhow::Result<()> {
    let weather = WeatherService::from_config(config)?;
    let app = router(AppState::new(weather));

    let host = config.server.host.as_str();
    let port = config.server.port;
    let listener = tokio::net::TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;

    tracing::info!(address = %listener.local_addr()?, "Server is running");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
