//! Error taxonomy shared by every store backend

use thiserror::Error;

/// Failure classes a collaborator call can produce.
///
/// The editor's policy is uniform: no automatic retries, each failure is
/// surfaced once, and the in-memory state that preceded the call survives so
/// the user can retry manually.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The identifier does not resolve to a document
    #[error("not found")]
    NotFound,

    /// Missing or expired credential
    #[error("auth error: {0}")]
    Auth(String),

    /// The backend rejected the payload
    #[error("validation error: {0}")]
    Validation(String),

    /// Network or backend failure
    #[error("transport error: {0}")]
    Transport(String),
}
