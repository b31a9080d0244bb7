//! Error types for the GitLab retrieval client.
//!
//! Three failure kinds cross the client boundary, matching the service's
//! error taxonomy: the upstream answered with a non-2xx status, the
//! transport failed before an answer arrived, or the fetched bytes could
//! not be persisted locally. Configuration errors surface through the same
//! type so that `GitLabClient::new` has a single error channel.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Errors from the GitLab retrieval client.
#[derive(Error, Debug)]
pub enum GitLabError {
    /// GitLab answered with a non-2xx status. The original status code is
    /// preserved for the HTTP layer to translate; `body` carries whatever
    /// the upstream returned, for logs.
    #[error("GitLab returned status {status} for {endpoint}")]
    Upstream {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// Transport-level failure reaching GitLab (connection refused, DNS,
    /// timeout, aborted body read).
    #[error("request to GitLab failed for {endpoint}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The fetched bytes could not be written under the download root.
    #[error("failed to persist artifact to {}", .path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Client construction or environment configuration failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl GitLabError {
    /// The upstream HTTP status, when this error carries one.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}
