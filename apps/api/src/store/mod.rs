//! Record Store — append-only persistence for suggestions and status pings.
//!
//! The trait is the seam: handlers and the suggestion service only see
//! `dyn RecordStore`, so tests can substitute an in-memory or failing store
//! and the Postgres implementation stays swappable.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::models::status::StatusCheckRecord;
use crate::models::suggestion::SuggestionRecord;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Appends one suggestion record. Callers on the suggestion path treat a
    /// failure as log-and-discard; the status path surfaces it.
    async fn insert_suggestion(&self, record: &SuggestionRecord) -> Result<(), StoreError>;

    async fn insert_status_check(&self, record: &StatusCheckRecord) -> Result<(), StoreError>;

    /// Returns up to `limit` status records. No ordering is guaranteed.
    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheckRecord>, StoreError>;
}

/// PostgreSQL-backed record store.
pub struct PgRecordStore {
    pool: PgPool,
}

impl PgRecordStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn insert_suggestion(&self, record: &SuggestionRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO mood_suggestions (id, mood, food, recipe, roast, source_ip, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(record.id)
        .bind(&record.mood)
        .bind(&record.food)
        .bind(&record.recipe)
        .bind(&record.roast)
        .bind(&record.source_ip)
        .bind(record.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert_status_check(&self, record: &StatusCheckRecord) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO status_checks (id, client_name, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(record.id)
        .bind(&record.client_name)
        .bind(record.timestamp)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_status_checks(&self, limit: i64) -> Result<Vec<StatusCheckRecord>, StoreError> {
        let records = sqlx::query_as::<_, StatusCheckRecord>(
            "SELECT id, client_name, created_at FROM status_checks LIMIT $1",
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }
}
