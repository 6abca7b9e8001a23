//! Shared error types for the services crate.

use thiserror::Error;

use storage::repository::StorageError;

/// Errors emitted by `ProgressStore`.
///
/// All of these are recoverable: a failed write keeps the optimistic
/// in-memory state, and a missing identity only means "no progress
/// available yet".
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProgressStoreError {
    #[error("no user identity available yet")]
    IdentityUnavailable,

    #[error("progress write failed: {0}")]
    WriteFailed(#[source] StorageError),

    #[error("progress read failed: {0}")]
    ReadFailed(#[source] StorageError),
}
