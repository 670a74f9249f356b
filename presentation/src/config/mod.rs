//! Presentation configuration

/// Text used in user-facing notices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeConfig {
    /// Address offered when a submission fails
    pub support_email: String,
    /// Site name used in the newsletter welcome
    pub site_name: String,
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            support_email: "info@urehgab.com".to_string(),
            site_name: "Urehgab".to_string(),
        }
    }
}

impl NoticeConfig {
    pub fn new(support_email: impl Into<String>, site_name: impl Into<String>) -> Self {
        Self {
            support_email: support_email.into(),
            site_name: site_name.into(),
        }
    }
}
