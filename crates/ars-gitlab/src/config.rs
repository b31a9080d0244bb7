//! GitLab client configuration.
//!
//! Base URL, access token, and download root for the retrieval client.
//! Loaded once at startup from environment variables; treated as read-only
//! thereafter.

use std::path::PathBuf;

use url::Url;
use zeroize::Zeroizing;

use crate::extensions::ExtensionMap;

/// Configuration for the GitLab retrieval client.
///
/// Custom `Debug` implementation redacts the `access_token` field to
/// prevent credential leakage in log output.
#[derive(Clone)]
pub struct GitLabConfig {
    /// GitLab base URL. Default: <https://gitlab.com>
    pub base_url: Url,
    /// Bearer token presented to the raw-file API. Required.
    pub access_token: Zeroizing<String>,
    /// Directory under which retrieved artifacts are persisted.
    pub download_root: PathBuf,
    /// Upstream request timeout in seconds.
    pub timeout_secs: u64,
    /// Mime-type to file-extension table for synthesized filenames.
    pub extensions: ExtensionMap,
}

impl std::fmt::Debug for GitLabConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitLabConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"[REDACTED]")
            .field("download_root", &self.download_root)
            .field("timeout_secs", &self.timeout_secs)
            .field("extensions", &self.extensions)
            .finish()
    }
}

impl GitLabConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `GITLAB_BASE_URL` (default: `https://gitlab.com`)
    /// - `GITLAB_ACCESS_TOKEN` (required)
    /// - `ARS_DOWNLOAD_DIR` (default: `./downloads`)
    /// - `GITLAB_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let access_token =
            std::env::var("GITLAB_ACCESS_TOKEN").map_err(|_| ConfigError::MissingToken)?;

        Ok(Self {
            base_url: env_url("GITLAB_BASE_URL", "https://gitlab.com")?,
            access_token: Zeroizing::new(access_token),
            download_root: std::env::var("ARS_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./downloads")),
            timeout_secs: std::env::var("GITLAB_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(30),
            extensions: ExtensionMap::default(),
        })
    }
}

fn env_url(var: &str, default: &str) -> Result<Url, ConfigError> {
    let raw = std::env::var(var).unwrap_or_else(|_| default.to_string());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidUrl(var.to_string(), e.to_string()))
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GITLAB_ACCESS_TOKEN environment variable is required")]
    MissingToken,
    #[error("GITLAB_ACCESS_TOKEN contains characters not representable in an Authorization header")]
    MalformedToken,
    #[error("invalid URL for {0}: {1}")]
    InvalidUrl(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_url_uses_default_when_var_absent() {
        let url = env_url("NONEXISTENT_VAR_98765", "https://gitlab.example.com").unwrap();
        assert_eq!(url.as_str(), "https://gitlab.example.com/");
    }

    #[test]
    fn env_url_rejects_invalid_url() {
        std::env::set_var("TEST_BAD_URL_ARS", "not a url");
        let result = env_url("TEST_BAD_URL_ARS", "https://gitlab.com");
        std::env::remove_var("TEST_BAD_URL_ARS");
        assert!(result.is_err());
    }

    #[test]
    fn debug_redacts_the_access_token() {
        let config = GitLabConfig {
            base_url: "https://gitlab.com".parse().unwrap(),
            access_token: Zeroizing::new("glpat-super-secret".into()),
            download_root: PathBuf::from("./downloads"),
            timeout_secs: 30,
            extensions: ExtensionMap::default(),
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("glpat-super-secret"));
        assert!(rendered.contains("[REDACTED]"));
    }
}
