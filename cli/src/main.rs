//! CLI entrypoint for formgate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use formgate_application::{
    FormSubmitter, NoNotifier, NoSubmissionLogger, SubmissionLogger, SubmissionNotifier,
    SubmitError, SubmitFormUseCase, SubmitOutcome,
};
use formgate_domain::{FormKind, FormSession};
use formgate_infrastructure::{
    ConfigLoader, FileConfig, HttpFormSubmitter, JsonlSubmissionLogger, SimulatedSubmitter,
};
use formgate_presentation::{
    Cli, Command, ConsoleFormatter, NoticeConfig, OutputFormat, SimpleReporter, SubmissionReporter,
};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let _log_guard = init_logging(&cli)?;

    if cli.no_color {
        colored::control::set_override(false);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    if cli.show_config {
        ConfigLoader::print_config_sources();
        println!();
        println!("{}", toml::to_string_pretty(&config)?);
        return Ok(ExitCode::SUCCESS);
    }

    config.validate().context("Invalid configuration")?;

    let Some(command) = cli.command.as_ref() else {
        Cli::command().print_help()?;
        return Ok(ExitCode::FAILURE);
    };

    info!("Starting formgate ({} form)", command.form());

    // === Form session ===
    let mut session = FormSession::for_kind(command.form());
    for (name, value) in command.field_values() {
        session.set_value(name, value)?;
    }

    if command.dry_run() {
        return Ok(dry_run(&cli, &session));
    }

    // === Dependency Injection ===
    let submitter = build_submitter(&config, session.kind())?;
    let logger = build_logger(&config);

    let cancellation = CancellationToken::new();
    let ctrl_c_token = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling submission");
            ctrl_c_token.cancel();
        }
    });

    let use_case = SubmitFormUseCase::new(submitter)
        .with_params(config.submission_params())
        .with_logger(logger)
        .with_cancellation(cancellation);

    let notifier: Box<dyn SubmissionNotifier> = if cli.quiet || cli.output == OutputFormat::Json {
        Box::new(NoNotifier)
    } else if std::io::stderr().is_terminal() {
        Box::new(SubmissionReporter::new())
    } else {
        Box::new(SimpleReporter)
    };

    let outcome = use_case
        .execute_with_notifier(&mut session, notifier.as_ref())
        .await;

    // Output results
    let formatter = ConsoleFormatter::new(NoticeConfig::new(
        config.submission.support_email.clone(),
        config.submission.site_name.clone(),
    ));
    let output = match cli.output {
        OutputFormat::Human => formatter.format(session.kind(), &outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };
    println!("{}", output);

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Validate without submitting
fn dry_run(cli: &Cli, session: &FormSession) -> ExitCode {
    let errors = session.check();
    debug!("Dry run: {} invalid field(s)", errors.len());

    let output = match (cli.output, errors.is_empty()) {
        (OutputFormat::Json, true) => ConsoleFormatter::format_valid_json(session.kind()),
        (OutputFormat::Json, false) => ConsoleFormatter::format_json(&SubmitOutcome::Invalid {
            errors: errors.clone(),
        }),
        (OutputFormat::Human, true) => ConsoleFormatter::format_valid(session.kind()),
        (OutputFormat::Human, false) => ConsoleFormatter::format_errors(&errors),
    };
    println!("{}", output);

    if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Pick the adapter for a form: HTTP when an endpoint is configured
fn build_submitter(config: &FileConfig, form: FormKind) -> Result<Arc<dyn FormSubmitter>> {
    match config.endpoint(form)? {
        Some(endpoint) => {
            let submitter = HttpFormSubmitter::new(endpoint, config.timeout())
                .context("Failed to build HTTP client")?;
            info!("Submitting {} form to {}", form, submitter.endpoint());
            Ok(Arc::new(submitter))
        }
        None if form == FormKind::Newsletter => {
            info!("No newsletter endpoint configured, simulating signup");
            Ok(Arc::new(SimulatedSubmitter::new(config.simulate_delay())))
        }
        None => Err(SubmitError::NotConfigured(form.to_string())).with_context(|| {
            format!(
                "Set [{}] endpoint in formgate.toml or FORMGATE_{}__ENDPOINT",
                form,
                form.as_str().to_uppercase()
            )
        }),
    }
}

fn build_logger(config: &FileConfig) -> Arc<dyn SubmissionLogger> {
    match config
        .logging
        .submission_log
        .as_ref()
        .and_then(|path| JsonlSubmissionLogger::new(path))
    {
        Some(logger) => {
            debug!("Recording submissions to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoSubmissionLogger),
    }
}

/// Initialize logging based on verbosity level, optionally teeing to a file
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(EnvFilter::new(level));

    let Some(path) = cli.log_file.as_ref() else {
        tracing_subscriber::registry().with(stderr_layer).init();
        return Ok(None);
    };

    let directory = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| std::path::Path::new("."));
    let file_name = path
        .file_name()
        .with_context(|| format!("Invalid log file path: {}", path.display()))?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(Some(guard))
}
