pub mod submission;

pub use submission::{ContactSubmission, Field, Service, SubmissionRecord};
