//! Validation rules attached to form fields.
//!
//! A field carries an ordered list of [`Rule`]s. Rules are checked in
//! order and the first one that fails decides the field's error, so an
//! empty email reports only [`ValidationErrorKind::MissingValue`] and never
//! a format error on top.

use crate::core::string::trimmed_len;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// `local@domain.tld`: no whitespace and no extra `@` in any part.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Minimum trimmed length of the contact form message.
pub const MIN_MESSAGE_LEN: usize = 10;

/// When a check runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckMode {
    /// The submit trigger fired: every field, values as submitted.
    Submit,
    /// The user left a single field: its value is trimmed first.
    Blur,
}

/// Kind of a failed validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// The trimmed value is empty.
    MissingValue,
    /// The value does not have the required shape (e.g. an email address).
    InvalidFormat,
    /// The trimmed value is shorter than required.
    TooShort,
}

impl fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationErrorKind::MissingValue => write!(f, "missing_value"),
            ValidationErrorKind::InvalidFormat => write!(f, "invalid_format"),
            ValidationErrorKind::TooShort => write!(f, "too_short"),
        }
    }
}

/// A single constraint on a field value.
///
/// Each rule owns the message shown when it fails. A required rule may
/// carry a shorter message for blur checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Fails with `MissingValue` when the trimmed value is empty.
    Required {
        message: String,
        blur_message: Option<String>,
    },
    /// Fails with `InvalidFormat` when a non-blank value is not
    /// `local@domain.tld`. Surrounding whitespace is part of the value.
    Email { message: String },
    /// Fails with `TooShort` when a non-empty trimmed value has fewer than `min` chars.
    MinLength { min: usize, message: String },
}

impl Rule {
    pub fn required(message: impl Into<String>) -> Self {
        Rule::Required {
            message: message.into(),
            blur_message: None,
        }
    }

    /// Required rule that shows `blur_message` when checked on blur
    pub fn required_with_blur(
        message: impl Into<String>,
        blur_message: impl Into<String>,
    ) -> Self {
        Rule::Required {
            message: message.into(),
            blur_message: Some(blur_message.into()),
        }
    }

    pub fn email(message: impl Into<String>) -> Self {
        Rule::Email {
            message: message.into(),
        }
    }

    pub fn min_length(min: usize, message: impl Into<String>) -> Self {
        Rule::MinLength {
            min,
            message: message.into(),
        }
    }

    /// The error kind this rule produces when it fails
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Rule::Required { .. } => ValidationErrorKind::MissingValue,
            Rule::Email { .. } => ValidationErrorKind::InvalidFormat,
            Rule::MinLength { .. } => ValidationErrorKind::TooShort,
        }
    }

    /// Message shown when the rule fails on submit
    pub fn message(&self) -> &str {
        match self {
            Rule::Required { message, .. } | Rule::Email { message } => message,
            Rule::MinLength { message, .. } => message,
        }
    }

    pub fn message_for(&self, mode: CheckMode) -> &str {
        match (self, mode) {
            (
                Rule::Required {
                    blur_message: Some(blur_message),
                    ..
                },
                CheckMode::Blur,
            ) => blur_message.as_str(),
            _ => self.message(),
        }
    }

    /// Check a value against this rule.
    ///
    /// Format and length rules pass on blank input; emptiness is the
    /// concern of `Required` alone.
    pub fn check(&self, value: &str) -> Result<(), ValidationErrorKind> {
        let trimmed = value.trim();
        let passed = match self {
            Rule::Required { .. } => !trimmed.is_empty(),
            Rule::Email { .. } => trimmed.is_empty() || is_valid_email(value),
            Rule::MinLength { min, .. } => trimmed.is_empty() || trimmed_len(trimmed) >= *min,
        };

        if passed { Ok(()) } else { Err(self.kind()) }
    }
}

/// Whether `email` has the `local@domain.tld` shape.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
