//! # ars-api: Axum HTTP service for artifact retrieval
//!
//! Exposes the retrieval pipeline over HTTP: decode a descriptor, validate
//! it, fetch the file from GitLab via `ars-gitlab`, persist it, and return
//! the handle.
//!
//! ## API Surface
//!
//! | Route                    | Handler                             |
//! |--------------------------|-------------------------------------|
//! | `POST /api/v1/artifacts` | [`routes::artifacts`]               |
//! | `GET /healthz`           | liveness probe, unconditionally 200 |
//! | `GET /ready`             | readiness probe, unconditionally 200 |
//! | `GET /openapi.json`      | [`openapi`]                         |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → CorrelationIdMiddleware → Handler
//! ```
//!
//! The correlation id from `X-Correlation-ID` (or a generated UUID) is
//! carried on the request's tracing span and echoed on every response.

pub mod error;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod state;

use axum::middleware::from_fn;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let api = Router::new()
        .merge(routes::artifacts::router())
        .merge(openapi::router())
        .with_state(state);

    let probes = Router::new()
        .route("/healthz", get(healthz))
        .route("/ready", get(ready));

    Router::new()
        .merge(probes)
        .merge(api)
        .layer(from_fn(middleware::correlation_id_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Probe response body.
#[derive(Debug, Serialize)]
pub(crate) struct ProbeStatus {
    status: &'static str,
}

/// GET /healthz: liveness probe; healthy whenever the process is running.
#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, description = "Service is healthy")),
    tag = "health"
)]
pub(crate) async fn healthz() -> Json<ProbeStatus> {
    Json(ProbeStatus { status: "healthy" })
}

/// GET /ready: readiness probe; no dependency check is performed.
#[utoipa::path(
    get,
    path = "/ready",
    responses((status = 200, description = "Service is ready")),
    tag = "health"
)]
pub(crate) async fn ready() -> Json<ProbeStatus> {
    Json(ProbeStatus { status: "ready" })
}
