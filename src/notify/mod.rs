pub mod webhook;

use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::models::SubmissionRecord;

pub use webhook::WebhookNotifier;

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("webhook request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("webhook responded with status {0}")]
    Status(u16),
}

/// Body posted to the automation webhook: the record's camel-case fields
/// plus `submittedAt`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookPayload {
    #[serde(flatten)]
    pub record: SubmissionRecord,
    pub submitted_at: String,
}

impl WebhookPayload {
    pub fn new(record: SubmissionRecord, submitted_at: DateTime<Utc>) -> Self {
        Self {
            record,
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Best-effort side notification sent after a lead is stored.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, payload: &WebhookPayload) -> Result<(), NotifyError>;
}
