//! # ars-cli: Operator CLI for the artifact retrieval service
//!
//! Two subcommands cover the two ways of pulling a file:
//!
//! - [`fetch`] goes straight to GitLab through `ars-gitlab`, using the same
//!   environment configuration as the service.
//! - [`request`] POSTs to a running `ars-api` instance and prints the JSON
//!   response, exercising the public API surface end to end.

pub mod fetch;
pub mod request;
