//! # Application State & Configuration
//!
//! Shared state for the Axum application, passed to route handlers via the
//! `State` extractor. Holds the process-wide configuration and the GitLab
//! client, both established once at startup and read-only thereafter -
//! requests share nothing else.

use std::sync::Arc;

use ars_gitlab::GitLabClient;

/// Process configuration, environment-sourced and read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Service name surfaced in the OpenAPI document.
    pub service_name: String,
    /// Service version surfaced in the OpenAPI document.
    pub service_version: String,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `ARS_PORT` (default: 8080)
    /// - `ARS_SERVICE_NAME` (default: `artifact-retrieval-service`)
    /// - `ARS_SERVICE_VERSION` (default: this crate's version)
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("ARS_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            service_name: std::env::var("ARS_SERVICE_NAME")
                .unwrap_or_else(|_| "artifact-retrieval-service".to_string()),
            service_version: std::env::var("ARS_SERVICE_VERSION")
                .unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string()),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            service_name: "artifact-retrieval-service".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Shared application state: configuration plus the retrieval client,
/// constructed at startup and handed to the router.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub gitlab: Arc<GitLabClient>,
}

impl AppState {
    /// Build the state from configuration and an already-constructed client.
    pub fn new(config: AppConfig, gitlab: GitLabClient) -> Self {
        Self {
            config,
            gitlab: Arc::new(gitlab),
        }
    }
}
