//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types
//! after validation.

use formgate_application::SubmissionParams;
use formgate_domain::FormKind;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("submission.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("{form}.endpoint is not a valid URL: {value}")]
    InvalidEndpoint { form: String, value: String },

    #[error("{form}.endpoint must use http or https: {value}")]
    UnsupportedScheme { form: String, value: String },
}

/// Raw contact form configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContactConfig {
    /// Where contact submissions are POSTed
    pub endpoint: Option<String>,
}

/// Raw newsletter form configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileNewsletterConfig {
    /// Where newsletter signups are POSTed (simulated when unset)
    pub endpoint: Option<String>,
    /// Delay of the simulated signup in milliseconds
    pub simulate_delay_ms: u64,
}

impl Default for FileNewsletterConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            simulate_delay_ms: 1500,
        }
    }
}

/// Raw submission behavior configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSubmissionConfig {
    /// Upper bound for one submission request
    pub timeout_seconds: u64,
    /// Address offered to the user when a submission fails
    pub support_email: String,
    /// Site name used in notices
    pub site_name: String,
}

impl Default for FileSubmissionConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 15,
            support_email: "info@urehgab.com".to_string(),
            site_name: "Urehgab".to_string(),
        }
    }
}

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file recording submission attempts and outcomes
    pub submission_log: Option<PathBuf>,
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub contact: FileContactConfig,
    pub newsletter: FileNewsletterConfig,
    pub submission: FileSubmissionConfig,
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.submission.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        self.endpoint(FormKind::Contact)?;
        self.endpoint(FormKind::Newsletter)?;
        Ok(())
    }

    /// Parsed endpoint for a form, `None` when not configured
    pub fn endpoint(&self, form: FormKind) -> Result<Option<Url>, ConfigValidationError> {
        let raw = match form {
            FormKind::Contact => self.contact.endpoint.as_deref(),
            FormKind::Newsletter => self.newsletter.endpoint.as_deref(),
        };

        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return Ok(None);
        };

        let url = Url::parse(raw).map_err(|_| ConfigValidationError::InvalidEndpoint {
            form: form.to_string(),
            value: raw.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Some(url)),
            _ => Err(ConfigValidationError::UnsupportedScheme {
                form: form.to_string(),
                value: raw.to_string(),
            }),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.submission.timeout_seconds)
    }

    pub fn simulate_delay(&self) -> Duration {
        Duration::from_millis(self.newsletter.simulate_delay_ms)
    }

    /// Convert to the use case's parameters
    pub fn submission_params(&self) -> SubmissionParams {
        SubmissionParams::default().with_timeout(self.timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileConfig::default();
        assert!(config.contact.endpoint.is_none());
        assert_eq!(config.newsletter.simulate_delay_ms, 1500);
        assert_eq!(config.submission.timeout_seconds, 15);
        assert_eq!(config.submission.support_email, "info@urehgab.com");
        assert!(config.logging.submission_log.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: FileConfig = toml::from_str(
            r#"
            [contact]
            endpoint = "https://formspree.io/f/abcd"

            [submission]
            timeout_seconds = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.submission.timeout_seconds, 30);
        // Unspecified keys keep their defaults
        assert_eq!(config.submission.site_name, "Urehgab");
        assert_eq!(config.newsletter.simulate_delay_ms, 1500);
        assert_eq!(
            config.endpoint(FormKind::Contact).unwrap().unwrap().as_str(),
            "https://formspree.io/f/abcd"
        );
        assert_eq!(config.submission_params().timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = FileConfig::default();
        config.submission.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_endpoint_validation() {
        let mut config = FileConfig::default();

        config.contact.endpoint = Some("not a url".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidEndpoint { .. })
        ));

        config.contact.endpoint = Some("ftp://example.com/upload".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::UnsupportedScheme { .. })
        ));

        config.contact.endpoint = Some("   ".to_string());
        assert_eq!(config.endpoint(FormKind::Contact), Ok(None));
    }

    #[test]
    fn test_serializes_to_toml() {
        let text = toml::to_string_pretty(&FileConfig::default()).unwrap();
        assert!(text.contains("[submission]"));
        assert!(text.contains("timeout_seconds = 15"));
    }
}
