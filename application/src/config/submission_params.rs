//! Submission parameters: use case control.
//!
//! [`SubmissionParams`] groups the static parameters that bound one call
//! of [`SubmitFormUseCase`](crate::use_cases::submit_form::SubmitFormUseCase).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default upper bound for a single submission request.
pub const DEFAULT_SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

/// Submission control parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionParams {
    /// Give up on the endpoint after this long and report a failure.
    pub timeout: Duration,
}

impl Default for SubmissionParams {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_SUBMIT_TIMEOUT,
        }
    }
}

impl SubmissionParams {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        assert_eq!(SubmissionParams::default().timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_builder() {
        let params = SubmissionParams::default().with_timeout(Duration::from_millis(250));
        assert_eq!(params.timeout, Duration::from_millis(250));
    }
}
