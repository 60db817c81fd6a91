use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db;
use crate::models::SubmissionRecord;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("insert timed out after {0:?}")]
    TimedOut(Duration),
}

/// The authoritative home of submitted leads.
#[async_trait]
pub trait LeadStore: Send + Sync {
    /// Insert one new row. Returns the store-assigned id.
    async fn insert(&self, record: &SubmissionRecord) -> Result<Uuid, StoreError>;
}

pub struct PgLeadStore {
    pool: PgPool,
    timeout: Duration,
}

impl PgLeadStore {
    pub fn new(pool: PgPool, timeout: Duration) -> Self {
        Self { pool, timeout }
    }
}

#[async_trait]
impl LeadStore for PgLeadStore {
    async fn insert(&self, record: &SubmissionRecord) -> Result<Uuid, StoreError> {
        tokio::time::timeout(
            self.timeout,
            db::contact_submissions::create(&self.pool, record),
        )
        .await
        .map_err(|_| StoreError::TimedOut(self.timeout))?
        .map_err(StoreError::from)
    }
}
