//! Submission notification port
//!
//! The rendering surface of a form. The use case reports what happened;
//! implementations decide how to show it (terminal, web page, ...).

use formgate_domain::{FormKind, SubmissionResult, ValidationErrors};

/// Callbacks for the lifecycle of one submit trigger
pub trait SubmissionNotifier: Send + Sync {
    /// Validation failed; show these annotations
    fn on_validation_failed(&self, form: FormKind, errors: &ValidationErrors);

    /// The trigger was accepted and a request is in flight
    fn on_submit_start(&self, form: FormKind);

    /// The request finished (either way)
    fn on_submit_complete(&self, form: FormKind, result: &SubmissionResult);

    /// The trigger fired while a request was in flight and was ignored
    fn on_submit_ignored(&self, _form: FormKind) {}
}

/// No-op notifier for when nothing should be rendered
pub struct NoNotifier;

impl SubmissionNotifier for NoNotifier {
    fn on_validation_failed(&self, _form: FormKind, _errors: &ValidationErrors) {}
    fn on_submit_start(&self, _form: FormKind) {}
    fn on_submit_complete(&self, _form: FormKind, _result: &SubmissionResult) {}
}
