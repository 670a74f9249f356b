//! Application layer for formgate
//!
//! This crate contains the submit use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_SUBMIT_TIMEOUT, SubmissionParams};
pub use ports::{
    form_submitter::{FormSubmitter, SubmitError},
    submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger},
    submission_notifier::{NoNotifier, SubmissionNotifier},
};
pub use use_cases::submit_form::{SubmitFormUseCase, SubmitOutcome};
