//! Per-form session state.
//!
//! A [`FormSession`] owns everything one rendered form needs: the field
//! values, the current annotations and the submit trigger status. One
//! session is created per form instance and passed explicitly to whoever
//! handles its events.
//!
//! # Submit trigger
//!
//! ```text
//!            begin_submit (valid)             finish_submit
//!   Idle ───────────────────────────▶ Submitting ──────────────▶ Idle
//!    ▲  begin_submit (invalid)            │ begin_submit
//!    └──────────┘                         └──▶ ignored
//! ```
//!
//! On success the fields are cleared; on failure they are left intact.

use super::field::FormField;
use super::schema::{FormKind, FormSchema};
use super::submission::{FormPayload, SubmissionResult, SubmissionStatus};
use super::validation::{ValidationError, ValidationErrors, validate, validate_field};
use crate::core::error::DomainError;

/// What happened when the submit trigger fired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation passed; the session is now `Submitting`.
    Started(FormPayload),
    /// Validation failed; the errors are now the session's annotations.
    Invalid(ValidationErrors),
    /// A submission is already in flight; the trigger was ignored.
    AlreadySubmitting,
}

/// State of one form instance.
#[derive(Debug, Clone)]
pub struct FormSession {
    kind: FormKind,
    fields: Vec<FormField>,
    errors: ValidationErrors,
    status: SubmissionStatus,
}

impl FormSession {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            kind: schema.kind(),
            fields: schema.fields(),
            errors: ValidationErrors::new(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn for_kind(kind: FormKind) -> Self {
        Self::new(kind.schema())
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.field(name).map(FormField::value)
    }

    fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name() == name)
    }

    fn field_mut(&mut self, name: &str) -> Result<&mut FormField, DomainError> {
        self.fields
            .iter_mut()
            .find(|f| f.name() == name)
            .ok_or_else(|| DomainError::UnknownField(name.to_string()))
    }

    /// The user changed a field.
    ///
    /// Any annotation on that field is dropped immediately. Returns
    /// whether one was dropped.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<bool, DomainError> {
        self.field_mut(name)?.set_value(value);
        Ok(self.errors.remove(name).is_some())
    }

    /// The user left a field: re-check it alone and update its annotation.
    pub fn blur(&mut self, name: &str) -> Result<Option<&ValidationError>, DomainError> {
        let error = validate_field(self.field_mut(name)?);
        self.errors.remove(name);
        match error {
            Some(error) => {
                self.errors.insert(error);
                Ok(self.errors.get(name))
            }
            None => Ok(None),
        }
    }

    /// The user pressed the submit trigger.
    pub fn begin_submit(&mut self) -> SubmitAttempt {
        if self.status.is_submitting() {
            return SubmitAttempt::AlreadySubmitting;
        }

        match FormPayload::from_fields(self.kind, &self.fields) {
            Ok(payload) => {
                self.errors.clear();
                self.status = SubmissionStatus::Submitting;
                SubmitAttempt::Started(payload)
            }
            Err(errors) => {
                self.errors = errors.clone();
                SubmitAttempt::Invalid(errors)
            }
        }
    }

    /// The in-flight submission finished; re-enable the trigger.
    pub fn finish_submit(&mut self, result: &SubmissionResult) {
        self.status = SubmissionStatus::Idle;
        if result.is_success() {
            self.reset();
        }
    }

    /// Clear every value and annotation.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.errors.clear();
    }

    /// Current validation result without touching the annotations.
    pub fn check(&self) -> ValidationErrors {
        validate(&self.fields)
    }
}
