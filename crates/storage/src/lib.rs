#![forbid(unsafe_code)]

//! Persistence backends for per-user progress documents: an in-memory
//! repository for tests and a SQLite-backed one for the app.

pub mod repository;
pub mod sqlite;

pub use repository::{InMemoryRepository, ProgressRepository, Storage, StorageError};
pub use sqlite::{SqliteInitError, SqliteRepository};
