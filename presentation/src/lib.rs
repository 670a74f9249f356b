//! Presentation layer for formgate
//!
//! This crate contains CLI definitions, the console formatter for
//! annotations and notices, and progress reporters. Together they are
//! the rendering surface of a form.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, ContactArgs, NewsletterArgs, OutputFormat};
pub use config::NoticeConfig;
pub use output::console::ConsoleFormatter;
pub use progress::reporter::{SimpleReporter, SubmissionReporter};
