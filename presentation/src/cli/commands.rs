//! CLI command definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use formgate_domain::{FormKind, names};
use std::path::PathBuf;

/// Output format for submission results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Annotations and notices for a terminal
    #[default]
    Human,
    /// JSON output
    Json,
}

/// CLI arguments for formgate
#[derive(Parser, Debug)]
#[command(name = "formgate")]
#[command(author, version, about = "Validate and submit website contact and newsletter forms")]
#[command(long_about = r#"
formgate validates form input the way the website does and submits it to
the configured form endpoint.

Every field is checked before anything is sent. Invalid fields are listed
with the message the site would show next to them; nothing is submitted
until all of them pass.

Configuration files are loaded from (in priority order):
1. FORMGATE_<SECTION>__<KEY> environment variables
2. --config <path>     Explicit config file
3. ./formgate.toml     Project-level config
4. ~/.config/formgate/config.toml   Global config

Example:
  formgate contact --first-name Jo --last-name Lee --email jo@lee.dev \
      --inquiry-type general --message "We would like to talk about hiring."
  formgate newsletter --email jo@lee.dev
  formgate --output json contact --dry-run --email nope
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human", global = true)]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and the merged configuration, then exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write diagnostic logs to this file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

/// Which form to fill in
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Submit the contact form
    Contact(ContactArgs),
    /// Sign up for the newsletter
    Newsletter(NewsletterArgs),
}

impl Command {
    pub fn form(&self) -> FormKind {
        match self {
            Command::Contact(_) => FormKind::Contact,
            Command::Newsletter(_) => FormKind::Newsletter,
        }
    }

    pub fn dry_run(&self) -> bool {
        match self {
            Command::Contact(args) => args.dry_run,
            Command::Newsletter(args) => args.dry_run,
        }
    }

    /// `(field name, value)` pairs as entered, missing arguments as empty
    pub fn field_values(&self) -> Vec<(&'static str, &str)> {
        match self {
            Command::Contact(args) => vec![
                (names::FIRST_NAME, args.first_name.as_str()),
                (names::LAST_NAME, args.last_name.as_str()),
                (names::EMAIL, args.email.as_str()),
                (names::INQUIRY_TYPE, args.inquiry_type.as_str()),
                (names::MESSAGE, args.message.as_str()),
            ],
            Command::Newsletter(args) => vec![(names::EMAIL, args.email.as_str())],
        }
    }
}

/// Contact form fields
#[derive(Args, Debug, Default)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub first_name: String,

    #[arg(long, default_value = "")]
    pub last_name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// Inquiry slug, e.g. general or hiring-partner
    #[arg(long, default_value = "")]
    pub inquiry_type: String,

    #[arg(long, default_value = "")]
    pub message: String,

    /// Validate only; do not submit
    #[arg(long)]
    pub dry_run: bool,
}

/// Newsletter signup fields
#[derive(Args, Debug, Default)]
pub struct NewsletterArgs {
    #[arg(long, default_value = "")]
    pub email: String,

    /// Validate only; do not submit
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_contact() {
        let cli = Cli::parse_from([
            "formgate",
            "-vv",
            "contact",
            "--first-name",
            "Jo",
            "--email",
            "jo@lee.dev",
            "--dry-run",
        ]);
        assert_eq!(cli.verbose, 2);
        let command = cli.command.unwrap();
        assert_eq!(command.form(), FormKind::Contact);
        assert!(command.dry_run());
        let values = command.field_values();
        assert_eq!(values[0], (names::FIRST_NAME, "Jo"));
        assert_eq!(values[1], (names::LAST_NAME, ""));
        assert_eq!(values[2], (names::EMAIL, "jo@lee.dev"));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["formgate", "newsletter", "--email", "a@b.co", "-o", "json"]);
        assert_eq!(cli.output, OutputFormat::Json);
        let command = cli.command.unwrap();
        assert_eq!(command.form(), FormKind::Newsletter);
        assert_eq!(command.field_values(), vec![(names::EMAIL, "a@b.co")]);
    }

    #[test]
    fn test_show_config_without_command() {
        let cli = Cli::parse_from(["formgate", "--show-config"]);
        assert!(cli.show_config);
        assert!(cli.command.is_none());
    }
}
