//! Mime-type to file-extension mapping.
//!
//! Used only when a filename must be synthesized because the artifact path
//! ends in `/`. The table is a policy choice that affects on-disk layout
//! compatibility, so it is configurable rather than hard-coded into the
//! client: start from [`ExtensionMap::default`] and override entries with
//! [`ExtensionMap::with_mapping`].

use std::collections::HashMap;

/// Lookup table from mime type to file extension (leading dot included).
///
/// Unknown or absent mime types fall back to `.bin`.
#[derive(Debug, Clone)]
pub struct ExtensionMap {
    map: HashMap<String, String>,
    fallback: String,
}

impl Default for ExtensionMap {
    fn default() -> Self {
        let entries = [
            ("text/plain", ".txt"),
            ("text/markdown", ".md"),
            ("application/json", ".json"),
            ("application/xml", ".xml"),
            ("text/xml", ".xml"),
            ("application/yaml", ".yaml"),
            ("text/yaml", ".yaml"),
            ("application/zip", ".zip"),
            ("application/pdf", ".pdf"),
            ("image/png", ".png"),
            ("image/jpeg", ".jpg"),
            ("image/gif", ".gif"),
        ];
        Self {
            map: entries
                .into_iter()
                .map(|(mime, ext)| (mime.to_string(), ext.to_string()))
                .collect(),
            fallback: ".bin".to_string(),
        }
    }
}

impl ExtensionMap {
    /// Extension for the given mime type, or the fallback when the mime
    /// type is absent or unrecognized.
    pub fn extension_for(&self, mime_type: Option<&str>) -> &str {
        mime_type
            .and_then(|mime| self.map.get(mime))
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }

    /// Add or override a mime-type mapping.
    pub fn with_mapping(mut self, mime_type: impl Into<String>, extension: impl Into<String>) -> Self {
        self.map.insert(mime_type.into(), extension.into());
        self
    }

    /// Replace the fallback extension used for unrecognized mime types.
    pub fn with_fallback(mut self, extension: impl Into<String>) -> Self {
        self.fallback = extension.into();
        self
    }
}
