//! Submission value objects: the validated payload and the outcome.

use super::field::{FormField, names};
use super::schema::FormKind;
use super::validation::{ValidationErrors, validate};
use crate::core::string::slug_to_label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Field values ready to be sent to an endpoint.
///
/// Only obtainable from fields that pass validation, so holding a
/// `FormPayload` means the submit precondition already holds; there is no
/// `Deserialize` impl. Values are those the fields submit (see
/// [`FormField::submitted_value`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormPayload {
    form: FormKind,
    values: BTreeMap<String, String>,
}

impl FormPayload {
    /// Validate `fields` and, if they pass, capture their submitted values.
    pub fn from_fields(form: FormKind, fields: &[FormField]) -> Result<Self, ValidationErrors> {
        let errors = validate(fields);
        if !errors.is_empty() {
            return Err(errors);
        }

        let values = fields
            .iter()
            .map(|f| (f.name().to_string(), f.submitted_value().to_string()))
            .collect();

        Ok(Self { form, values })
    }

    pub fn form(&self) -> FormKind {
        self.form
    }

    pub fn get(&self, field_name: &str) -> Option<&str> {
        self.values.get(field_name).map(String::as_str)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Inquiry type as a readable phrase (`hiring-partner` → `hiring partner`)
    pub fn inquiry_label(&self) -> Option<String> {
        self.get(names::INQUIRY_TYPE).map(slug_to_label)
    }
}

/// Outcome of one submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SubmissionResult {
    /// The endpoint accepted the submission.
    Success { payload: FormPayload },
    /// The endpoint rejected it, or it never arrived. Inputs are kept.
    Failure { error_detail: String },
}

impl SubmissionResult {
    pub fn success(payload: FormPayload) -> Self {
        SubmissionResult::Success { payload }
    }

    pub fn failure(error_detail: impl Into<String>) -> Self {
        SubmissionResult::Failure {
            error_detail: error_detail.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionResult::Success { .. })
    }

    pub fn payload(&self) -> Option<&FormPayload> {
        match self {
            SubmissionResult::Success { payload } => Some(payload),
            SubmissionResult::Failure { .. } => None,
        }
    }

    pub fn error_detail(&self) -> Option<&str> {
        match self {
            SubmissionResult::Success { .. } => None,
            SubmissionResult::Failure { error_detail } => Some(error_detail),
        }
    }
}

/// Submit trigger state of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Editable; the trigger is enabled
    #[default]
    Idle,
    /// A request is in flight; the trigger is disabled
    Submitting,
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionStatus::Idle => write!(f, "idle"),
            SubmissionStatus::Submitting => write!(f, "submitting"),
        }
    }
}
