//! # ars-api: Binary Entry Point
//!
//! Starts the Axum HTTP server for the artifact retrieval service.
//! Configuration is environment-sourced and read once; a missing
//! `GITLAB_ACCESS_TOKEN` fails startup.

use ars_api::state::{AppConfig, AppState};
use ars_gitlab::{GitLabClient, GitLabConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Structured JSON logs. RUST_LOG wins, then ARS_LOG_LEVEL, then "info".
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = std::env::var("ARS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        tracing_subscriber::EnvFilter::new(level)
    });
    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    let config = AppConfig::from_env();

    let gitlab_config = GitLabConfig::from_env().map_err(|e| {
        tracing::error!("GitLab configuration failed: {e}");
        e
    })?;
    let gitlab = GitLabClient::new(gitlab_config).map_err(|e| {
        tracing::error!("Failed to create GitLab client: {e}");
        e
    })?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        %addr,
        "artifact retrieval service listening"
    );

    let state = AppState::new(config, gitlab);
    let app = ars_api::app(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
