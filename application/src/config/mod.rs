//! Application-level configuration.
//!
//! - [`SubmissionParams`]: bounds on a submission call (timeout)

pub mod submission_params;

pub use submission_params::{DEFAULT_SUBMIT_TIMEOUT, SubmissionParams};
