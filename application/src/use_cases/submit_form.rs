//! Submit Form use case
//!
//! Drives one submit trigger: validate, hand the payload to the
//! submitter under a timeout, and settle the form session.

use crate::config::SubmissionParams;
use crate::ports::form_submitter::{FormSubmitter, SubmitError};
use crate::ports::submission_logger::{NoSubmissionLogger, SubmissionEvent, SubmissionLogger};
use crate::ports::submission_notifier::{NoNotifier, SubmissionNotifier};
use formgate_domain::{FormPayload, FormSession, SubmissionResult, SubmitAttempt, ValidationErrors};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// What one press of the submit trigger led to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid { errors: ValidationErrors },
    /// A submission was already in flight; the trigger was ignored
    Ignored,
    /// A request was sent and settled
    Completed { result: SubmissionResult },
}

impl SubmitOutcome {
    /// Whether the form reached the endpoint and was accepted
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Completed { result } if result.is_success())
    }
}

/// Use case for submitting a form
pub struct SubmitFormUseCase<S: FormSubmitter + ?Sized + 'static> {
    submitter: Arc<S>,
    params: SubmissionParams,
    logger: Arc<dyn SubmissionLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl<S: FormSubmitter + ?Sized + 'static> SubmitFormUseCase<S> {
    pub fn new(submitter: Arc<S>) -> Self {
        Self {
            submitter,
            params: SubmissionParams::default(),
            logger: Arc::new(NoSubmissionLogger),
            cancellation_token: None,
        }
    }

    pub fn with_params(mut self, params: SubmissionParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn SubmissionLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Set a cancellation token for aborting an in-flight submission
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the use case with no rendering
    pub async fn execute(&self, session: &mut FormSession) -> SubmitOutcome {
        self.execute_with_notifier(session, &NoNotifier).await
    }

    /// Press the submit trigger of `session` and see it through.
    ///
    /// Holds `session` for the whole call. Event loops that must keep the
    /// form editable while the request is in flight should call
    /// [`FormSession::begin_submit`], [`Self::submit`] and
    /// [`FormSession::finish_submit`] themselves.
    pub async fn execute_with_notifier(
        &self,
        session: &mut FormSession,
        notifier: &dyn SubmissionNotifier,
    ) -> SubmitOutcome {
        let form = session.kind();

        let payload = match session.begin_submit() {
            SubmitAttempt::Started(payload) => payload,
            SubmitAttempt::Invalid(errors) => {
                debug!("{} form has {} invalid field(s)", form, errors.len());
                notifier.on_validation_failed(form, &errors);
                return SubmitOutcome::Invalid { errors };
            }
            SubmitAttempt::AlreadySubmitting => {
                debug!("Ignoring submit trigger: {} form is already submitting", form);
                notifier.on_submit_ignored(form);
                return SubmitOutcome::Ignored;
            }
        };

        notifier.on_submit_start(form);
        let result = self.submit(&payload).await;
        session.finish_submit(&result);
        notifier.on_submit_complete(form, &result);

        SubmitOutcome::Completed { result }
    }

    /// Send a validated payload and report the outcome.
    ///
    /// Never fails: every problem (rejection, transport error, timeout,
    /// cancellation) becomes a [`SubmissionResult::Failure`].
    pub async fn submit(&self, payload: &FormPayload) -> SubmissionResult {
        let form = payload.form();
        info!("Submitting {} form ({} fields)", form, payload.values().len());
        self.logger.log(SubmissionEvent::new(
            "submission_started",
            json!({
                "form": form.as_str(),
                "fields": payload.field_names().collect::<Vec<_>>(),
            }),
        ));

        match self.deliver(payload).await {
            Ok(()) => {
                info!("{} form accepted by endpoint", form);
                self.logger.log(SubmissionEvent::new(
                    "submission_succeeded",
                    json!({ "form": form.as_str() }),
                ));
                SubmissionResult::success(payload.clone())
            }
            Err(e) => {
                warn!("{} form submission failed: {}", form, e);
                self.logger.log(SubmissionEvent::new(
                    "submission_failed",
                    json!({
                        "form": form.as_str(),
                        "error": e.to_string(),
                        "retryable": e.is_retryable(),
                    }),
                ));
                SubmissionResult::failure(e.to_string())
            }
        }
    }

    async fn deliver(&self, payload: &FormPayload) -> Result<(), SubmitError> {
        let timeout = self.params.timeout;
        let bounded = async {
            match tokio::time::timeout(timeout, self.submitter.submit(payload)).await {
                Ok(result) => result,
                Err(_) => Err(SubmitError::Timeout(timeout)),
            }
        };

        match &self.cancellation_token {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(SubmitError::Cancelled),
                    result = bounded => result,
                }
            }
            None => bounded.await,
        }
    }
}
