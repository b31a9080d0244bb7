//! # Artifact Retrieval Route
//!
//! The one API operation: `POST /api/v1/artifacts`. The pipeline is
//! receive → validate → retrieve → respond; any step's failure
//! short-circuits to an error response via [`AppError`].

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use ars_core::{ArtifactDescriptor, RetrievedArtifact};

use crate::error::{AppError, ErrorBody};
use crate::state::AppState;

/// Build the artifacts router.
pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/artifacts", post(retrieve_artifact))
}

/// Request body for artifact retrieval. All fields are required.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RetrieveArtifactRequest {
    /// Repository identifier in `namespace/name` form (e.g. `my-org/my-repo`).
    pub repository: String,
    /// Path to the artifact within the repository.
    pub artifact_path: String,
    /// Version selector: branch, tag, or commit id.
    pub version_selector: String,
}

impl From<RetrieveArtifactRequest> for ArtifactDescriptor {
    fn from(req: RetrieveArtifactRequest) -> Self {
        Self::new(req.repository, req.artifact_path, req.version_selector)
    }
}

/// Response body for a successful retrieval.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactResponse {
    /// Deterministic artifact identifier.
    pub artifact_id: String,
    /// Mime type reported by GitLab, charset parameters stripped.
    pub mime_type: Option<String>,
    /// Absolute local path of the saved file.
    pub file_path: Option<String>,
}

impl From<RetrievedArtifact> for ArtifactResponse {
    fn from(artifact: RetrievedArtifact) -> Self {
        Self {
            artifact_id: artifact.artifact_id,
            mime_type: artifact.mime_type,
            file_path: artifact.file_path.map(|p| p.display().to_string()),
        }
    }
}

/// POST /api/v1/artifacts: retrieve one artifact from GitLab.
#[utoipa::path(
    post,
    path = "/api/v1/artifacts",
    request_body = RetrieveArtifactRequest,
    responses(
        (status = 200, description = "Artifact retrieved and persisted", body = ArtifactResponse),
        (status = 400, description = "Descriptor validation failed", body = ErrorBody),
        (status = 422, description = "Malformed request body", body = ErrorBody),
        (status = 502, description = "GitLab returned a server error", body = ErrorBody),
        (status = 500, description = "Connectivity or internal failure", body = ErrorBody),
    ),
    tag = "artifacts"
)]
pub(crate) async fn retrieve_artifact(
    State(state): State<AppState>,
    body: Result<Json<RetrieveArtifactRequest>, JsonRejection>,
) -> Result<Json<ArtifactResponse>, AppError> {
    let Json(req) = body.map_err(|rejection| AppError::Malformed(rejection.body_text()))?;
    let descriptor = ArtifactDescriptor::from(req);

    if let Err(err) = descriptor.validate() {
        tracing::warn!(error = %err, "descriptor validation failed");
        return Err(AppError::from(err));
    }

    tracing::info!(
        repository = %descriptor.repository,
        artifact_path = %descriptor.artifact_path,
        version_selector = %descriptor.version_selector,
        "retrieving artifact"
    );

    match state.gitlab.retrieve(&descriptor).await {
        Ok(artifact) => {
            tracing::info!(
                artifact_id = %artifact.artifact_id,
                mime_type = artifact.mime_type.as_deref().unwrap_or("unknown"),
                "artifact retrieved"
            );
            Ok(Json(artifact.into()))
        }
        Err(err) => {
            tracing::error!(
                repository = %descriptor.repository,
                artifact_path = %descriptor.artifact_path,
                version_selector = %descriptor.version_selector,
                error = %err,
                "artifact retrieval failed"
            );
            Err(AppError::from(err))
        }
    }
}
