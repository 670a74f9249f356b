//! Port for structured submission logging.
//!
//! Defines the [`SubmissionLogger`] trait for recording submission
//! attempts and outcomes to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port keeps a
//! machine-readable audit trail (JSONL). Events carry field names, never
//! field values.

use serde_json::Value;

/// A structured submission event for logging.
pub struct SubmissionEvent {
    /// Event type identifier (e.g., "submission_started", "submission_failed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl SubmissionEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging submission events.
///
/// `log` is synchronous and infallible; logging failures never disturb
/// the submission flow.
pub trait SubmissionLogger: Send + Sync {
    /// Record a submission event.
    fn log(&self, event: SubmissionEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoSubmissionLogger;

impl SubmissionLogger for NoSubmissionLogger {
    fn log(&self, _event: SubmissionEvent) {}
}
