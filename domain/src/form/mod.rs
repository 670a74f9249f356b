//! Form subdomain: fields, rules, validation and the submit state machine.
//!
//! - [`field::FormField`]: one named input with its ordered rules
//! - [`rule::Rule`]: required / email / minimum length checks
//! - [`validation::validate`]: pure check over all fields
//! - [`schema::FormSchema`]: the contact and newsletter forms
//! - [`submission`]: validated payload, result and trigger status
//! - [`session::FormSession`]: component-local state for one form

pub mod field;
pub mod rule;
pub mod schema;
pub mod session;
pub mod submission;
pub mod validation;
