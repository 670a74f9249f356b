//! Configuration file loading for formgate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `FORMGATE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./formgate.toml` or `./.formgate.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/formgate/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileContactConfig, FileLoggingConfig,
    FileNewsletterConfig, FileSubmissionConfig,
};
pub use loader::ConfigLoader;
