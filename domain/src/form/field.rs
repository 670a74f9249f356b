//! Form field entity

use super::rule::{CheckMode, Rule, ValidationErrorKind};

/// Field names of the contact form, as sent to the endpoint.
pub mod names {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const INQUIRY_TYPE: &str = "inquiryType";
    pub const MESSAGE: &str = "message";
}

/// One named input of a form.
///
/// The value is kept exactly as entered. A field marked with
/// [`trim_on_submit`](Self::trim_on_submit) is submitted (and checked on
/// submit) without its surrounding whitespace; any other field is
/// submitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    name: String,
    value: String,
    constraints: Vec<Rule>,
    trim_on_submit: bool,
}

impl FormField {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            constraints: Vec::new(),
            trim_on_submit: false,
        }
    }

    /// Append a rule; rules are checked in the order they were added
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.constraints.push(rule);
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn trim_on_submit(mut self) -> Self {
        self.trim_on_submit = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// The value as it goes to the endpoint
    pub fn submitted_value(&self) -> &str {
        if self.trim_on_submit {
            self.value.trim()
        } else {
            &self.value
        }
    }

    pub fn constraints(&self) -> &[Rule] {
        &self.constraints
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Run the rules in order and return the first failure, if any.
    ///
    /// On submit the rules see [`submitted_value`](Self::submitted_value);
    /// on blur they see the trimmed value.
    pub fn first_failure(&self, mode: CheckMode) -> Option<(&Rule, ValidationErrorKind)> {
        let value = match mode {
            CheckMode::Submit => self.submitted_value(),
            CheckMode::Blur => self.value.trim(),
        };
        self.constraints
            .iter()
            .find_map(|rule| rule.check(value).err().map(|kind| (rule, kind)))
    }
}
