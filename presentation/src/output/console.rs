//! Console output formatter for form outcomes

use crate::config::NoticeConfig;
use colored::Colorize;
use formgate_application::SubmitOutcome;
use formgate_domain::{FormKind, FormPayload, SubmissionResult, ValidationErrors, names};

/// Formats annotations and notices for console display
pub struct ConsoleFormatter {
    notices: NoticeConfig,
}

impl ConsoleFormatter {
    pub fn new(notices: NoticeConfig) -> Self {
        Self { notices }
    }

    /// Format whatever the submit trigger led to
    pub fn format(&self, form: FormKind, outcome: &SubmitOutcome) -> String {
        match outcome {
            SubmitOutcome::Invalid { errors } => Self::format_errors(errors),
            SubmitOutcome::Ignored => {
                format!("{}\n", "A submission is already in progress.".yellow())
            }
            SubmitOutcome::Completed { result } => self.format_result(form, result),
        }
    }

    /// Format as JSON
    pub fn format_json(outcome: &SubmitOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// One annotation per invalid field
    pub fn format_errors(errors: &ValidationErrors) -> String {
        let mut output = format!("{}\n", "Please fix the following:".red().bold());
        for error in errors {
            output.push_str(&format!(
                "  {} {} {}\n",
                "x".red(),
                format!("{}:", error.field_name).bold(),
                error.message
            ));
        }
        output
    }

    /// Dry-run confirmation
    pub fn format_valid(form: FormKind) -> String {
        format!(
            "{} {} form is valid (not submitted)\n",
            "v".green(),
            capitalize(form.as_str())
        )
    }

    /// Dry-run confirmation as JSON
    pub fn format_valid_json(form: FormKind) -> String {
        let value = serde_json::json!({ "status": "valid", "form": form.as_str() });
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn format_result(&self, form: FormKind, result: &SubmissionResult) -> String {
        match result {
            SubmissionResult::Success { payload } => match form {
                FormKind::Contact => Self::contact_success(payload),
                FormKind::Newsletter => self.newsletter_success(payload),
            },
            SubmissionResult::Failure { error_detail } => self.failure(error_detail),
        }
    }

    fn contact_success(payload: &FormPayload) -> String {
        let first_name = payload.get(names::FIRST_NAME).unwrap_or("there");
        let inquiry = payload.inquiry_label().unwrap_or_else(|| "general".to_string());
        format!(
            "{}\nThank you, {}! We've received your {} inquiry and will get back to you within 24 hours.\n",
            "Message Sent Successfully!".green().bold(),
            first_name,
            inquiry
        )
    }

    fn newsletter_success(&self, payload: &FormPayload) -> String {
        let email = payload.get(names::EMAIL).unwrap_or_default();
        format!(
            "{}\nThank you for subscribing! You'll receive our latest insights, hiring trends, and career tips at {}.\n{}\n",
            format!("Welcome to the {} Community!", self.notices.site_name)
                .green()
                .bold(),
            email.bold(),
            "Check your inbox for a welcome message. You can unsubscribe at any time.".dimmed()
        )
    }

    fn failure(&self, error_detail: &str) -> String {
        format!(
            "{}\n{} {}\n{}\n",
            format!(
                "Sorry, there was an error sending your message. Please try again or contact us directly at {}",
                self.notices.support_email
            )
            .red()
            .bold(),
            "Reason:".dimmed(),
            error_detail,
            "Your input was kept; nothing was lost.".dimmed()
        )
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(NoticeConfig::default())
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formgate_domain::{FormSession, SubmitAttempt, ValidationError, ValidationErrorKind};

    fn plain() {
        colored::control::set_override(false);
    }

    fn payload(form: FormKind, values: &[(&str, &str)]) -> FormPayload {
        let mut session = FormSession::for_kind(form);
        for (name, value) in values {
            session.set_value(name, *value).unwrap();
        }
        match session.begin_submit() {
            SubmitAttempt::Started(payload) => payload,
            other => panic!("expected Started, got {:?}", other),
        }
    }

    #[test]
    fn test_format_errors_lists_each_field() {
        plain();
        let errors: ValidationErrors = [
            ValidationError::new(
                names::EMAIL,
                ValidationErrorKind::InvalidFormat,
                "Please enter a valid email address",
            ),
            ValidationError::new(
                names::MESSAGE,
                ValidationErrorKind::TooShort,
                "Please provide more details (at least 10 characters)",
            ),
        ]
        .into_iter()
        .collect();

        let text = ConsoleFormatter::format_errors(&errors);
        assert!(text.contains("email: Please enter a valid email address"));
        assert!(text.contains("message: Please provide more details"));
    }

    #[test]
    fn test_contact_success_notice() {
        plain();
        let payload = payload(
            FormKind::Contact,
            &[
                (names::FIRST_NAME, "Jo"),
                (names::LAST_NAME, "Lee"),
                (names::EMAIL, "jo@lee.dev"),
                (names::INQUIRY_TYPE, "hiring-partner"),
                (names::MESSAGE, "We are hiring two engineers."),
            ],
        );
        let text = ConsoleFormatter::default()
            .format_result(FormKind::Contact, &SubmissionResult::success(payload));
        assert!(text.contains("Message Sent Successfully!"));
        assert!(text.contains("Thank you, Jo! We've received your hiring partner inquiry"));
    }

    #[test]
    fn test_newsletter_success_uses_site_name() {
        plain();
        let payload = payload(FormKind::Newsletter, &[(names::EMAIL, "a@b.co")]);
        let formatter = ConsoleFormatter::new(NoticeConfig::new("help@example.com", "Acme"));
        let text = formatter.format_result(FormKind::Newsletter, &SubmissionResult::success(payload));
        assert!(text.contains("Welcome to the Acme Community!"));
        assert!(text.contains("a@b.co"));
    }

    #[test]
    fn test_failure_mentions_support_email_and_reason() {
        plain();
        let formatter = ConsoleFormatter::new(NoticeConfig::new("help@example.com", "Acme"));
        let text = formatter.format(
            FormKind::Contact,
            &SubmitOutcome::Completed {
                result: SubmissionResult::failure("Endpoint rejected the submission: HTTP 500"),
            },
        );
        assert!(text.contains("contact us directly at help@example.com"));
        assert!(text.contains("HTTP 500"));
    }

    #[test]
    fn test_format_json() {
        let json = ConsoleFormatter::format_json(&SubmitOutcome::Ignored);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "ignored");
    }

    #[test]
    fn test_format_valid_json() {
        let json = ConsoleFormatter::format_valid_json(FormKind::Contact);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "valid");
        assert_eq!(value["form"], "contact");
    }

    #[test]
    fn test_format_valid() {
        plain();
        assert_eq!(
            ConsoleFormatter::format_valid(FormKind::Newsletter),
            "v Newsletter form is valid (not submitted)\n"
        );
    }
}
