//! Local persistence of fetched artifact bytes.
//!
//! On-disk layout:
//! `{download_root}/{sanitize(repository)}/{sanitize(versionSelector)}/{dirs of artifactPath}/{basename}`
//! where `sanitize` replaces path separators with `_`. Directory creation
//! is idempotent; concurrent writers of the same descriptor race and the
//! last writer wins.

use std::path::{Path, PathBuf};

use ars_core::ArtifactDescriptor;

use crate::error::GitLabError;
use crate::extensions::ExtensionMap;

/// Replace path separators so a repository or version selector becomes a
/// single directory component (`org/repo` → `org_repo`).
pub(crate) fn sanitize_component(component: &str) -> String {
    component.replace(['/', '\\'], "_")
}

/// Compute the target path for a descriptor's bytes under `root`.
///
/// Subdirectories of the artifact path are recreated below the
/// repository/version directories. An artifact path ending in `/` has no
/// basename; the filename is then synthesized as `artifact{ext}` from the
/// mime type.
pub(crate) fn target_path(
    root: &Path,
    descriptor: &ArtifactDescriptor,
    mime_type: Option<&str>,
    extensions: &ExtensionMap,
) -> PathBuf {
    let mut dir = root
        .join(sanitize_component(&descriptor.repository))
        .join(sanitize_component(&descriptor.version_selector));

    let (subdirs, basename) = match descriptor.artifact_path.rsplit_once('/') {
        Some((parent, name)) => (Some(parent), name),
        None => (None, descriptor.artifact_path.as_str()),
    };
    if let Some(subdirs) = subdirs {
        for segment in subdirs.split('/').filter(|s| !s.is_empty()) {
            dir.push(segment);
        }
    }

    let file_name = if basename.is_empty() {
        format!("artifact{}", extensions.extension_for(mime_type))
    } else {
        basename.to_string()
    };
    dir.join(file_name)
}

/// Write `content` to `path`, creating parent directories as needed, and
/// return the canonicalized absolute path of the saved file.
pub(crate) async fn write_artifact(path: &Path, content: &[u8]) -> Result<PathBuf, GitLabError> {
    let storage_err = |source| GitLabError::Storage {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent).await.map_err(storage_err)?;
    }
    tokio::fs::write(path, content).await.map_err(storage_err)?;
    tokio::fs::canonicalize(path).await.map_err(storage_err)
}
