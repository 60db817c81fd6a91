pub mod control;
pub mod fields;
pub mod flow;
pub mod store;


pub use control::{ControlView, SubmitControl};
pub use flow::{Outcome, SubmissionFlow, Toast, ToastKind, FAILURE_MESSAGE, SUCCESS_MESSAGE};
pub use store::{LeadStore, PgLeadStore, StoreError};
