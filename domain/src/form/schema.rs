//! Form schemas: which fields a form has and which rules apply to them.

use super::field::{FormField, names};
use super::rule::{MIN_MESSAGE_LEN, Rule};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The forms the site offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    /// Contact form: name, email, inquiry type and a message
    #[default]
    Contact,
    /// Newsletter signup: a single email address
    Newsletter,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::Newsletter => "newsletter",
        }
    }

    pub fn schema(&self) -> FormSchema {
        match self {
            FormKind::Contact => FormSchema::contact(),
            FormKind::Newsletter => FormSchema::newsletter(),
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Blueprint for a form instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    kind: FormKind,
    fields: Vec<FormField>,
}

impl FormSchema {
    pub fn new(kind: FormKind, fields: Vec<FormField>) -> Self {
        Self { kind, fields }
    }

    /// The contact form
    ///
    /// Values are submitted as entered, so a padded email address fails
    /// the format check on submit (the blur check trims it).
    pub fn contact() -> Self {
        Self::new(
            FormKind::Contact,
            vec![
                FormField::new(names::FIRST_NAME).with_rule(Rule::required_with_blur(
                    "First name is required",
                    "This field is required",
                )),
                FormField::new(names::LAST_NAME).with_rule(Rule::required_with_blur(
                    "Last name is required",
                    "This field is required",
                )),
                FormField::new(names::EMAIL)
                    .with_rule(Rule::required("Email is required"))
                    .with_rule(Rule::email("Please enter a valid email address")),
                FormField::new(names::INQUIRY_TYPE).with_rule(Rule::required_with_blur(
                    "Please select an inquiry type",
                    "Please select an option",
                )),
                FormField::new(names::MESSAGE)
                    .with_rule(Rule::required("Please tell us about your needs"))
                    .with_rule(Rule::min_length(
                        MIN_MESSAGE_LEN,
                        format!(
                            "Please provide more details (at least {} characters)",
                            MIN_MESSAGE_LEN
                        ),
                    )),
            ],
        )
    }

    /// The newsletter signup form; its address is trimmed before anything else
    pub fn newsletter() -> Self {
        Self::new(
            FormKind::Newsletter,
            vec![
                FormField::new(names::EMAIL)
                    .trim_on_submit()
                    .with_rule(Rule::required("Email address is required"))
                    .with_rule(Rule::email("Please enter a valid email address")),
            ],
        )
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Fresh, empty copies of the schema's fields
    pub fn fields(&self) -> Vec<FormField> {
        self.fields.clone()
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_schema_fields_in_order() {
        let names: Vec<_> = FormSchema::contact().field_names().map(str::to_string).collect();
        assert_eq!(
            names,
            vec!["firstName", "lastName", "email", "inquiryType", "message"]
        );
    }

    #[test]
    fn test_newsletter_schema() {
        let schema = FormSchema::newsletter();
        assert_eq!(schema.kind(), FormKind::Newsletter);
        let fields = schema.fields();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].constraints()[0].message(), "Email address is required");
    }

    #[test]
    fn test_newsletter_trims_but_contact_does_not() {
        let newsletter = FormSchema::newsletter().fields()[0].clone().with_value(" a@b.co ");
        assert_eq!(newsletter.submitted_value(), "a@b.co");

        let contact_email = FormSchema::contact()
            .fields()
            .into_iter()
            .find(|f| f.name() == names::EMAIL)
            .unwrap()
            .with_value(" a@b.co ");
        assert_eq!(contact_email.submitted_value(), " a@b.co ");
    }

    #[test]
    fn test_kind_schema_roundtrip() {
        assert_eq!(FormKind::Contact.schema().kind(), FormKind::Contact);
        assert_eq!(FormKind::Newsletter.to_string(), "newsletter");
    }
}
