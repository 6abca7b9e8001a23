use async_trait::async_trait;
use hub_core::model::{ProgressRecord, UserId};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Repository contract for per-user progress documents.
///
/// One document per user, keyed by `UserId`. Writes always carry the full
/// record, so the last committed write wins even when writes overlap; a
/// write only ever touches its own user's document.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the stored record for a user.
    ///
    /// Returns `Ok(None)` when the user has no document yet; that is a
    /// normal first-session state, not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be reached or the stored
    /// document cannot be decoded.
    async fn load(&self, user: &UserId) -> Result<Option<ProgressRecord>, StorageError>;

    /// Persist or replace the user's record.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be stored.
    async fn save(&self, user: &UserId, record: &ProgressRecord) -> Result<(), StorageError>;
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    records: Arc<Mutex<HashMap<UserId, ProgressRecord>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn load(&self, user: &UserId) -> Result<Option<ProgressRecord>, StorageError> {
        let guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(user).cloned())
    }

    async fn save(&self, user: &UserId, record: &ProgressRecord) -> Result<(), StorageError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(user.clone(), record.clone());
        Ok(())
    }
}

/// Aggregates the progress repository behind a trait object for easy backend
/// swapping between SQLite and in-memory.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            progress: Arc::new(InMemoryRepository::new()),
        }
    }
}
