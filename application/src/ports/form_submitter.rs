//! Form submitter port
//!
//! Defines the interface for delivering a validated form to its endpoint.

use async_trait::async_trait;
use formgate_domain::FormPayload;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while delivering a submission
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Endpoint rejected the submission: HTTP {status} {reason}")]
    Rejected { status: u16, reason: String },

    #[error("Could not reach the endpoint: {0}")]
    Transport(String),

    #[error("No response from the endpoint within {0:?}")]
    Timeout(Duration),

    #[error("Submission cancelled")]
    Cancelled,

    #[error("No endpoint configured for the {0} form")]
    NotConfigured(String),
}

impl SubmitError {
    /// Whether retrying the same payload later could succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            SubmitError::Rejected { status, .. } => *status >= 500 || *status == 429,
            SubmitError::Transport(_) | SubmitError::Timeout(_) | SubmitError::Cancelled => true,
            SubmitError::NotConfigured(_) => false,
        }
    }
}

/// Delivers a validated form to an external endpoint.
///
/// One call is one external request; calls are not idempotent.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    /// Send the payload. `Ok(())` means the endpoint accepted it.
    async fn submit(&self, payload: &FormPayload) -> Result<(), SubmitError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = SubmitError::Rejected {
            status: 422,
            reason: "Unprocessable Entity".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Endpoint rejected the submission: HTTP 422 Unprocessable Entity"
        );
        assert_eq!(
            SubmitError::NotConfigured("contact".to_string()).to_string(),
            "No endpoint configured for the contact form"
        );
    }

    #[test]
    fn test_is_retryable() {
        let rejected = |status| SubmitError::Rejected {
            status,
            reason: String::new(),
        };
        assert!(rejected(503).is_retryable());
        assert!(rejected(429).is_retryable());
        assert!(!rejected(400).is_retryable());
        assert!(SubmitError::Timeout(Duration::from_secs(1)).is_retryable());
        assert!(!SubmitError::NotConfigured("x".to_string()).is_retryable());
    }
}
