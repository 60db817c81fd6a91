pub mod contact_submissions;
