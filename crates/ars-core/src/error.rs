//! # Validation Errors
//!
//! Structured error type for descriptor validation, built with `thiserror`.
//! Messages are part of the API contract: the HTTP layer returns them
//! verbatim as the `detail` of a 400 response, so each names the offending
//! field and, where useful, carries the rejected value.

use thiserror::Error;

/// Descriptor validation failure. See [`crate::ArtifactDescriptor::validate`]
/// for the rules and their ordering.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `repository` is empty or whitespace-only.
    #[error("repository cannot be empty")]
    EmptyRepository,

    /// `artifactPath` is empty or whitespace-only.
    #[error("artifactPath cannot be empty")]
    EmptyArtifactPath,

    /// `versionSelector` is empty or whitespace-only.
    #[error("versionSelector cannot be empty")]
    EmptyVersionSelector,

    /// `repository` has no `/` separator at all.
    #[error("repository must be in format 'org/repo', got: {0}")]
    RepositoryMissingSlash(String),

    /// `repository` is not exactly two `[A-Za-z0-9_.-]` segments.
    #[error("repository format is invalid, expected 'org/repo' format: {0}")]
    RepositoryFormat(String),
}
