//! # ars-core: Core domain types for the artifact retrieval service
//!
//! Defines the two data holders the whole system revolves around:
//!
//! - [`ArtifactDescriptor`]: the (repository, artifact path, version
//!   selector) triple identifying one file at one point in history.
//! - [`RetrievedArtifact`]: the handle returned after a successful
//!   retrieval: deterministic artifact id, the mime type reported by the
//!   upstream host, and the local path of the saved bytes.
//!
//! Plus descriptor validation ([`ArtifactDescriptor::validate`]), which is
//! pure and synchronous: no I/O happens in this crate.

pub mod artifact;
pub mod error;

pub use artifact::{ArtifactDescriptor, RetrievedArtifact};
pub use error::ValidationError;
