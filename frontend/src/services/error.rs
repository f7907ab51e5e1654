//! Remote-failure taxonomy.
//!
//! Every gateway call resolves to one of these; screens render the
//! `Display` text in a banner or toast and never retry on their own.
//! Field-level checks that fail before a request is issued are the
//! separate `common::validation::ValidationError` taxonomy.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The identity provider rejected the credentials, or the sign-in
    /// call itself failed. Carries the provider's message with the vendor
    /// framing stripped.
    #[error("{0}")]
    Authentication(String),
    /// Credentials were valid but the profile is not an administrator
    /// one. Enforced by this console, not by the provider.
    #[error("Unauthorized access. Admin privileges required.")]
    Authorization,
    /// The document asked for does not exist.
    #[error("{0} not found.")]
    NotFound(&'static str),
    /// The asset gateway dropped or rejected an upload.
    #[error("Upload failed: {0}")]
    Upload(String),
    /// The document gateway rejected a read, write or delete.
    #[error("{0}")]
    Persistence(String),
}
