use std::sync::Arc;

use crate::config::Config;
use crate::notify::Notifier;
use crate::submission::{LeadStore, SubmissionFlow};

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn LeadStore>,
    pub notifier: Arc<dyn Notifier>,
}

impl AppState {
    /// A fresh contact form bound to this app's store and webhook.
    pub fn flow(&self) -> SubmissionFlow {
        SubmissionFlow::new(self.store.clone(), self.notifier.clone())
    }
}
