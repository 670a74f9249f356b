//! Progress reporting for form submission

use colored::Colorize;
use formgate_application::SubmissionNotifier;
use formgate_domain::{FormKind, SubmissionResult, ValidationErrors};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Shows a spinner on the submit trigger while the request is in flight
pub struct SubmissionReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl SubmissionReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    /// Label of the busy trigger, as the site shows it
    pub fn busy_label(form: FormKind) -> &'static str {
        match form {
            FormKind::Contact => "Sending...",
            FormKind::Newsletter => "Subscribing...",
        }
    }

    /// Label of the idle trigger
    pub fn idle_label(form: FormKind) -> &'static str {
        match form {
            FormKind::Contact => "Send Message",
            FormKind::Newsletter => "Subscribe",
        }
    }
}

impl Default for SubmissionReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionNotifier for SubmissionReporter {
    fn on_validation_failed(&self, _form: FormKind, _errors: &ValidationErrors) {}

    fn on_submit_start(&self, form: FormKind) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(Self::busy_label(form));
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut spinner) = self.spinner.lock() {
            *spinner = Some(pb);
        }
    }

    fn on_submit_complete(&self, form: FormKind, result: &SubmissionResult) {
        let Ok(mut spinner) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = spinner.take() {
            let mark = if result.is_success() {
                "v".green()
            } else {
                "x".red()
            };
            pb.finish_with_message(format!("{} {}", mark, Self::idle_label(form)));
        }
    }

    fn on_submit_ignored(&self, form: FormKind) {
        if let Ok(spinner) = self.spinner.lock()
            && let Some(pb) = spinner.as_ref()
        {
            pb.set_message(format!("{} (already in progress)", Self::busy_label(form)));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleReporter;

impl SubmissionNotifier for SimpleReporter {
    fn on_validation_failed(&self, form: FormKind, errors: &ValidationErrors) {
        println!(
            "{} {} form: {} invalid field(s)",
            "->".cyan(),
            form,
            errors.len()
        );
    }

    fn on_submit_start(&self, form: FormKind) {
        println!("{} {}", "->".cyan(), SubmissionReporter::busy_label(form).bold());
    }

    fn on_submit_complete(&self, _form: FormKind, result: &SubmissionResult) {
        if result.is_success() {
            println!("  {} accepted", "v".green());
        } else {
            println!("  {} failed", "x".red());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(SubmissionReporter::busy_label(FormKind::Contact), "Sending...");
        assert_eq!(SubmissionReporter::busy_label(FormKind::Newsletter), "Subscribing...");
        assert_eq!(SubmissionReporter::idle_label(FormKind::Contact), "Send Message");
    }

    #[test]
    fn test_spinner_lifecycle() {
        let reporter = SubmissionReporter::new();
        reporter.on_submit_start(FormKind::Newsletter);
        assert!(reporter.spinner.lock().unwrap().is_some());

        reporter.on_submit_ignored(FormKind::Newsletter);
        reporter.on_submit_complete(FormKind::Newsletter, &SubmissionResult::failure("x"));
        assert!(reporter.spinner.lock().unwrap().is_none());
    }
}
