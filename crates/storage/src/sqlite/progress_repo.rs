use hub_core::model::{ProgressRecord, UserId};
use sqlx::Row;

use super::SqliteRepository;
use crate::repository::{ProgressRepository, StorageError};

fn ser<E: core::fmt::Display>(e: E) -> StorageError {
    StorageError::Serialization(e.to_string())
}

#[async_trait::async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load(&self, user: &UserId) -> Result<Option<ProgressRecord>, StorageError> {
        let row = sqlx::query("SELECT progress FROM user_progress WHERE user_id = ?1")
            .bind(user.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        match row {
            Some(row) => {
                let document: String = row.try_get("progress").map_err(ser)?;
                let record = serde_json::from_str(&document).map_err(ser)?;
                Ok(Some(record))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, user: &UserId, record: &ProgressRecord) -> Result<(), StorageError> {
        let document = serde_json::to_string(record).map_err(ser)?;

        sqlx::query(
            r"
            INSERT INTO user_progress (user_id, progress, updated_at)
            VALUES (?1, ?2, datetime('now'))
            ON CONFLICT(user_id) DO UPDATE SET
                progress = excluded.progress,
                updated_at = excluded.updated_at
            ",
        )
        .bind(user.as_str())
        .bind(document)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        tracing::debug!(user = %user, "progress document saved");
        Ok(())
    }
}
