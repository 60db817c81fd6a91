use std::sync::Arc;

use chrono::Utc;
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Field, SubmissionRecord};
use crate::notify::{Notifier, WebhookPayload};

use super::control::{ControlView, SubmitControl};
use super::store::{LeadStore, StoreError};

pub const SUCCESS_MESSAGE: &str = "Thank you for your submission! We will contact you soon.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: &'static str,
}

impl Toast {
    pub fn success(message: &'static str) -> Self {
        Self {
            kind: ToastKind::Success,
            message,
        }
    }

    pub fn error(message: &'static str) -> Self {
        Self {
            kind: ToastKind::Error,
            message,
        }
    }

    /// CSS modifier used by the page templates.
    pub fn class(&self) -> &'static str {
        match self.kind {
            ToastKind::Success => "toast-success",
            ToastKind::Error => "toast-error",
        }
    }
}

/// One contact form: its field values, its submit control and the toasts
/// raised so far.
pub struct SubmissionFlow {
    store: Arc<dyn LeadStore>,
    notifier: Arc<dyn Notifier>,
    record: SubmissionRecord,
    control: SubmitControl,
    toasts: Vec<Toast>,
}

impl SubmissionFlow {
    pub fn new(store: Arc<dyn LeadStore>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            store,
            notifier,
            record: SubmissionRecord::default(),
            control: SubmitControl::new(),
            toasts: Vec::new(),
        }
    }

    pub fn record(&self) -> &SubmissionRecord {
        &self.record
    }

    pub fn set_field(&mut self, field: Field, value: &str) -> Result<(), String> {
        self.record.set(field, value)
    }

    /// Replace every field at once.
    pub fn load(&mut self, record: SubmissionRecord) {
        self.record = record;
    }

    pub fn control(&self) -> ControlView {
        self.control.view()
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    /// Store the current record, then tell the webhook about it.
    ///
    /// Only the store write decides the outcome. A webhook failure is
    /// logged and otherwise ignored, and the stored row stays. On success
    /// the fields go back to their defaults; on failure they are kept so the
    /// visitor can retry. The control is disabled for the whole call.
    pub async fn submit(&mut self) -> Outcome {
        let _in_flight = self.control.engage();
        let snapshot = self.record.clone();

        if let Err(e) = self.persist(&snapshot).await {
            tracing::error!("Failed to store contact submission: {e}");
            self.toasts.push(Toast::error(FAILURE_MESSAGE));
            return Outcome::Failure;
        }

        self.notify(snapshot).await;

        self.toasts.push(Toast::success(SUCCESS_MESSAGE));
        self.record = SubmissionRecord::default();
        Outcome::Success
    }

    async fn persist(&self, record: &SubmissionRecord) -> Result<Uuid, StoreError> {
        let id = self.store.insert(record).await?;
        tracing::info!(submission_id = %id, service = %record.service, "Contact submission stored");
        Ok(id)
    }

    async fn notify(&self, record: SubmissionRecord) {
        let payload = WebhookPayload::new(record, Utc::now());
        if let Err(e) = self.notifier.notify(&payload).await {
            tracing::warn!("Webhook notification failed: {e}");
        }
    }
}
