//! # ars-gitlab: Typed Rust client for the GitLab raw-file API
//!
//! Fetches one file per call from a GitLab-compatible host and persists it
//! under the configured download root. This crate is the only path through
//! which the artifact retrieval service talks to the upstream host.
//!
//! ## API Path Convention
//!
//! GitLab addresses a file by project path and file path, both with `/`
//! encoded as `%2F`:
//!
//! ```text
//! GET {base_url}/api/v4/projects/{repository}/repository/files/{artifactPath}/raw?ref={versionSelector}
//! ```
//!
//! ## Lifecycle
//!
//! Construct one [`GitLabClient`] at startup and share it; the underlying
//! `reqwest::Client` pools connections and releases them on drop. Every
//! [`GitLabClient::retrieve`] call performs exactly one network request and
//! one file write: no caching, no retries, no deduplication of identical
//! in-flight requests.

pub mod config;
pub mod error;
pub mod extensions;
mod storage;

pub use config::{ConfigError, GitLabConfig};
pub use error::GitLabError;
pub use extensions::ExtensionMap;

use std::path::PathBuf;
use std::time::Duration;

use ars_core::{ArtifactDescriptor, RetrievedArtifact};
use url::Url;

/// HTTP client for retrieving artifacts from GitLab.
#[derive(Debug, Clone)]
pub struct GitLabClient {
    http: reqwest::Client,
    base_url: Url,
    download_root: PathBuf,
    extensions: ExtensionMap,
}

impl GitLabClient {
    /// Create a new client from configuration.
    ///
    /// Builds the shared `reqwest::Client` with the bearer `Authorization`
    /// default header and the configured upstream timeout.
    pub fn new(config: GitLabConfig) -> Result<Self, GitLabError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers({
                let mut headers = reqwest::header::HeaderMap::new();
                headers.insert(
                    reqwest::header::AUTHORIZATION,
                    reqwest::header::HeaderValue::from_str(&format!(
                        "Bearer {}",
                        config.access_token.as_str()
                    ))
                    .map_err(|_| GitLabError::Config(ConfigError::MalformedToken))?,
                );
                headers
            })
            .build()
            .map_err(|e| GitLabError::Transport {
                endpoint: "client_init".into(),
                source: e,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url,
            download_root: config.download_root,
            extensions: config.extensions,
        })
    }

    /// Retrieve one artifact: authenticated GET against the raw-file
    /// endpoint, then persist the body under the download root.
    ///
    /// Calls
    /// `GET {base_url}/api/v4/projects/{repository}/repository/files/{artifactPath}/raw?ref={versionSelector}`.
    ///
    /// A non-2xx upstream response becomes [`GitLabError::Upstream`] with
    /// the original status preserved; transport failures become
    /// [`GitLabError::Transport`]; write failures become
    /// [`GitLabError::Storage`]. Nothing is retried.
    pub async fn retrieve(
        &self,
        descriptor: &ArtifactDescriptor,
    ) -> Result<RetrievedArtifact, GitLabError> {
        let endpoint = format!(
            "GET /projects/{}/repository/files/{}/raw",
            descriptor.repository, descriptor.artifact_path
        );
        let url = format!(
            "{}api/v4/projects/{}/repository/files/{}/raw",
            self.base_url,
            encode_path_segment(&descriptor.repository),
            encode_path_segment(&descriptor.artifact_path),
        );

        let resp = self
            .http
            .get(&url)
            .query(&[("ref", descriptor.version_selector.as_str())])
            .send()
            .await
            .map_err(|e| GitLabError::Transport {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(GitLabError::Upstream {
                endpoint,
                status,
                body,
            });
        }

        let mime_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(strip_charset);

        let content = resp.bytes().await.map_err(|e| GitLabError::Transport {
            endpoint: endpoint.clone(),
            source: e,
        })?;

        let artifact_id = descriptor.artifact_id();
        let target = storage::target_path(
            &self.download_root,
            descriptor,
            mime_type.as_deref(),
            &self.extensions,
        );
        let file_path = storage::write_artifact(&target, &content).await?;

        tracing::debug!(
            artifact_id = %artifact_id,
            path = %file_path.display(),
            bytes = content.len(),
            "artifact persisted"
        );

        Ok(RetrievedArtifact {
            artifact_id,
            mime_type,
            file_path: Some(file_path),
        })
    }
}

/// Encode a repository or file path for use as a single URL path segment,
/// GitLab-style: `/` becomes `%2F`.
fn encode_path_segment(segment: &str) -> String {
    segment.replace('/', "%2F")
}

/// Strip any `;charset=...` (or other parameter) suffix from a
/// `Content-Type` header value: `application/json; charset=utf-8` becomes
/// `application/json`.
fn strip_charset(value: &str) -> String {
    match value.split_once(';') {
        Some((mime, _)) => mime.trim().to_string(),
        None => value.trim().to_string(),
    }
}
