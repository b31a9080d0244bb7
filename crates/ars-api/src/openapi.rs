//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented routes into a single OpenAPI spec,
//! served at `/openapi.json`. The document's title and version come from
//! the runtime configuration so deployments can brand the surface.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use utoipa::OpenApi;

use crate::state::AppState;

/// Assembled OpenAPI spec for the API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Artifact Retrieval Service",
        version = "0.1.0",
        description = "Service for retrieving artifacts from GitLab.",
        license(name = "MIT")
    ),
    paths(
        crate::healthz,
        crate::ready,
        crate::routes::artifacts::retrieve_artifact,
    ),
    components(schemas(
        crate::error::ErrorBody,
        crate::routes::artifacts::RetrieveArtifactRequest,
        crate::routes::artifacts::ArtifactResponse,
    )),
    tags(
        (name = "artifacts", description = "Artifact retrieval pipeline"),
        (name = "health", description = "Liveness and readiness probes"),
    )
)]
pub struct ApiDoc;

/// Build the OpenAPI router.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json: return the generated OpenAPI specification.
async fn openapi_json(State(state): State<AppState>) -> Json<utoipa::openapi::OpenApi> {
    let mut doc = ApiDoc::openapi();
    doc.info.title = state.config.service_name.clone();
    doc.info.version = state.config.service_version.clone();
    Json(doc)
}
