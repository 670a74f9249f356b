//! Infrastructure layer for formgate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod http;
pub mod logging;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileContactConfig, FileLoggingConfig,
    FileNewsletterConfig, FileSubmissionConfig,
};
pub use http::{HttpFormSubmitter, SimulatedSubmitter};
pub use logging::JsonlSubmissionLogger;
