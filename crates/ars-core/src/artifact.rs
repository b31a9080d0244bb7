//! # Artifact Descriptor & Retrieval Result
//!
//! [`ArtifactDescriptor`] is created from an inbound request, consumed once
//! by the retrieval client, and never mutated. [`RetrievedArtifact`] is
//! created by the client after a successful fetch and returned to the
//! caller; the file it names persists independently on disk with no tracked
//! ownership or cleanup.
//!
//! Wire names follow the public API contract: `repository`, `artifactPath`,
//! `versionSelector` on the way in; `artifactId`, `mimeType`, `filePath` on
//! the way out.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Descriptor for an artifact to retrieve: one file at one point in history.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactDescriptor {
    /// Repository identifier in `namespace/name` form (e.g. `my-org/my-repo`).
    pub repository: String,
    /// Slash-separated path to the file within the repository.
    pub artifact_path: String,
    /// Branch name, tag name, or commit id, resolved by the upstream host.
    pub version_selector: String,
}

impl ArtifactDescriptor {
    /// Create a descriptor from its three fields.
    pub fn new(
        repository: impl Into<String>,
        artifact_path: impl Into<String>,
        version_selector: impl Into<String>,
    ) -> Self {
        Self {
            repository: repository.into(),
            artifact_path: artifact_path.into(),
            version_selector: version_selector.into(),
        }
    }

    /// Deterministic artifact identifier:
    /// `{repository}:{artifactPath}:{versionSelector}`.
    ///
    /// A pure function of the three fields: identical descriptors always
    /// yield identical ids. No deduplication is implied; every retrieval
    /// fetches and writes anew.
    pub fn artifact_id(&self) -> String {
        format!(
            "{}:{}:{}",
            self.repository, self.artifact_path, self.version_selector
        )
    }

    /// Validate the descriptor's business rules.
    ///
    /// Rules are checked in order and the first failure wins:
    ///
    /// 1. `repository` non-empty after trimming.
    /// 2. `artifactPath` non-empty after trimming.
    /// 3. `versionSelector` non-empty after trimming.
    /// 4. `repository` contains at least one `/`.
    /// 5. `repository` is exactly two segments of `[A-Za-z0-9_.-]`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.repository.trim().is_empty() {
            return Err(ValidationError::EmptyRepository);
        }
        if self.artifact_path.trim().is_empty() {
            return Err(ValidationError::EmptyArtifactPath);
        }
        if self.version_selector.trim().is_empty() {
            return Err(ValidationError::EmptyVersionSelector);
        }
        if !self.repository.contains('/') {
            return Err(ValidationError::RepositoryMissingSlash(
                self.repository.clone(),
            ));
        }
        if !repository_format_is_valid(&self.repository) {
            return Err(ValidationError::RepositoryFormat(self.repository.clone()));
        }
        Ok(())
    }
}

/// `namespace/name` where both segments are non-empty and drawn from
/// `[A-Za-z0-9_.-]`. A second `/` lands in the name segment and fails
/// the character check, so exactly two segments are accepted.
fn repository_format_is_valid(repository: &str) -> bool {
    match repository.split_once('/') {
        Some((namespace, name)) => segment_is_valid(namespace) && segment_is_valid(name),
        None => false,
    }
}

fn segment_is_valid(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// Result of a successful retrieval, returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievedArtifact {
    /// Deterministic identifier, see [`ArtifactDescriptor::artifact_id`].
    pub artifact_id: String,
    /// Mime type reported by the upstream host, charset parameters stripped.
    pub mime_type: Option<String>,
    /// Absolute filesystem path of the saved bytes.
    pub file_path: Option<PathBuf>,
}
