//! Pure form validation.
//!
//! [`validate`] checks every field and collects all failures; it never
//! stops at the first invalid field. It has no side effects, so the
//! caller decides how (and whether) to render the result.
//!
//! [`validate_field`] is the blur check of a single field. It trims the
//! value first and may word its messages differently.

use super::field::FormField;
use super::rule::{CheckMode, ValidationErrorKind};
use serde::{Deserialize, Serialize};

/// A failed check on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    pub field_name: String,
    pub kind: ValidationErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        field_name: impl Into<String>,
        kind: ValidationErrorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Set of validation errors keyed by field name.
///
/// Holds at most one error per field; inserting for a field that already
/// has an error replaces it in place. Iteration follows insertion order,
/// which for [`validate`] is the order of the form's fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the error for `error.field_name`
    pub fn insert(&mut self, error: ValidationError) {
        match self
            .errors
            .iter_mut()
            .find(|e| e.field_name == error.field_name)
        {
            Some(existing) => *existing = error,
            None => self.errors.push(error),
        }
    }

    /// Remove the error for a field, returning it if there was one
    pub fn remove(&mut self, field_name: &str) -> Option<ValidationError> {
        let index = self.errors.iter().position(|e| e.field_name == field_name)?;
        Some(self.errors.remove(index))
    }

    pub fn get(&self, field_name: &str) -> Option<&ValidationError> {
        self.errors.iter().find(|e| e.field_name == field_name)
    }

    pub fn contains(&self, field_name: &str) -> bool {
        self.get(field_name).is_some()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.iter()
    }
}

impl<'a> IntoIterator for &'a ValidationErrors {
    type Item = &'a ValidationError;
    type IntoIter = std::slice::Iter<'a, ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = ValidationErrors::new();
        for error in iter {
            errors.insert(error);
        }
        errors
    }
}

fn check_field(field: &FormField, mode: CheckMode) -> Option<ValidationError> {
    field
        .first_failure(mode)
        .map(|(rule, kind)| ValidationError::new(field.name(), kind, rule.message_for(mode)))
}

/// Validate a single field (the "blur" check).
pub fn validate_field(field: &FormField) -> Option<ValidationError> {
    check_field(field, CheckMode::Blur)
}

/// Validate every field and collect all failures (the submit check).
pub fn validate(fields: &[FormField]) -> ValidationErrors {
    fields
        .iter()
        .filter_map(|field| check_field(field, CheckMode::Submit))
        .collect()
}
