//! Core domain concepts shared across the form subdomain.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`string`]: small text helpers used when rendering values

pub mod error;
pub mod string;
