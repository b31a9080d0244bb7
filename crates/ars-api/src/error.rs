//! # API Error Types
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Maps descriptor validation and GitLab client failures to HTTP status
//! codes and `{"detail": ...}` response bodies. Upstream 4xx statuses are
//! preserved; upstream 5xx collapse to 502; internal details are never
//! exposed to clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use ars_core::ValidationError;
use ars_gitlab::GitLabError;

/// JSON error response body, used for every failure status.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable explanation of the failure.
    pub detail: String,
}

/// Application-level error type for the artifact retrieval endpoint.
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body failed to parse into the expected shape (422).
    #[error("malformed request body: {0}")]
    Malformed(String),

    /// Well-formed body violating a descriptor business rule (400).
    #[error("{0}")]
    Validation(String),

    /// GitLab reported a failure; the status is what the client will see
    /// (the original 4xx, or 502 for collapsed upstream server errors).
    #[error("{detail}")]
    Upstream { status: StatusCode, detail: String },

    /// Transport-level failure reaching GitLab (500).
    #[error("{0}")]
    Connect(String),

    /// Storage or unexpected failure (500). Message is logged but not
    /// returned to the client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// The HTTP status this error maps to.
    fn status(&self) -> StatusCode {
        match self {
            Self::Malformed(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Upstream { status, .. } => *status,
            Self::Connect(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Never expose internal error messages to clients.
        let detail = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };

        if matches!(&self, Self::Internal(_)) {
            tracing::error!(error = %self, "internal server error");
        }

        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Translate GitLab client failures per the error taxonomy: upstream 4xx
/// pass through with an explanatory detail, upstream 5xx collapse to 502
/// with the original code noted, transport failures become a generic 500
/// "failed to connect", and storage or other failures stay internal.
impl From<GitLabError> for AppError {
    fn from(err: GitLabError) -> Self {
        match &err {
            GitLabError::Upstream { status, .. } => match StatusCode::from_u16(*status) {
                Ok(code) if code.is_client_error() => {
                    let detail = match *status {
                        401 => "GitLab authentication failed: check the configured access token"
                            .to_string(),
                        403 => "Access to the requested artifact is forbidden".to_string(),
                        404 => {
                            "Artifact not found: verify repository, artifact path, and version selector"
                                .to_string()
                        }
                        other => format!("GitLab rejected the request with status {other}"),
                    };
                    Self::Upstream {
                        status: code,
                        detail,
                    }
                }
                Ok(code) if code.is_server_error() => Self::Upstream {
                    status: StatusCode::BAD_GATEWAY,
                    detail: format!("GitLab returned server error {status}"),
                },
                _ => Self::Internal(err.to_string()),
            },
            GitLabError::Transport { .. } => {
                Self::Connect("Failed to connect to GitLab".to_string())
            }
            _ => Self::Internal(err.to_string()),
        }
    }
}
