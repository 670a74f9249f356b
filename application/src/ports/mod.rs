//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation
//! adapters must implement.

pub mod form_submitter;
pub mod submission_logger;
pub mod submission_notifier;
