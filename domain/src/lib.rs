//! Domain layer for formgate
//!
//! This crate contains form fields, validation rules and the submit
//! state machine. It has no dependencies on infrastructure or
//! presentation concerns.
//!
//! # Core Concepts
//!
//! - **Validation** is a pure function from fields to a set of
//!   [`ValidationError`]s, at most one per field.
//! - **Submission** only starts from a [`FormPayload`], which can only be
//!   built from fields that validate cleanly.
//! - **[`FormSession`]** holds the values, annotations and trigger status
//!   of one form instance.

pub mod core;
pub mod form;

// Re-export commonly used types
pub use core::error::DomainError;
pub use form::{
    field::{FormField, names},
    rule::{CheckMode, MIN_MESSAGE_LEN, Rule, ValidationErrorKind, is_valid_email},
    schema::{FormKind, FormSchema},
    session::{FormSession, SubmitAttempt},
    submission::{FormPayload, SubmissionResult, SubmissionStatus},
    validation::{ValidationError, ValidationErrors, validate, validate_field},
};
