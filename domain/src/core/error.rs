//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// Validation failures are not errors in this sense: they are reported
/// as [`ValidationErrors`](crate::form::validation::ValidationErrors) and
/// recovered inside the form session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
}
