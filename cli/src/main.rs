//! CLI for reporting analyzer diagnostics as GitHub issues.
//!
//! Builds the pre-filled "new issue" URL for a diagnostic and opens it in the
//! default browser, or prints it with `--dry-run`.

use clap::Parser;
use report_issue_fix::{Diagnostic, ReportOutcome, Runner, RunnerConfig, RunnerError, SourceSpan};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Report Issue - Open a pre-filled issue for an analyzer diagnostic.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Diagnostic identifier (e.g. PC001).
    #[arg(long, required_unless_present = "list_ids")]
    id: Option<String>,

    /// Diagnostic message.
    #[arg(long, required_unless_present = "list_ids")]
    message: Option<String>,

    /// Start offset of the diagnostic.
    #[arg(long, default_value_t = 0)]
    span_start: usize,

    /// Length of the diagnostic span.
    #[arg(long, default_value_t = 0)]
    span_length: usize,

    /// Path to the reporter config file.
    #[arg(long, default_value = report_issue_fix::runner::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// New-issue URL, overriding the config file and REPORT_ISSUE_URL.
    #[arg(long)]
    issue_url: Option<String>,

    /// Print the issue URL instead of opening it.
    #[arg(long)]
    dry_run: bool,

    /// List the diagnostic identifiers that can be reported, then exit.
    #[arg(long)]
    list_ids: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let args = Args::parse();

    match run(args).await {
        Ok(Some(outcome)) => {
            print_outcome(&outcome);

            if outcome.is_fixable() {
                ExitCode::from(0)
            } else {
                ExitCode::from(1)
            }
        }
        Ok(None) => ExitCode::from(0),
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, so a printed URL
///   stays alone on stdout
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
///
/// Returns `None` when only listing identifiers.
async fn run(args: Args) -> Result<Option<ReportOutcome>, RunnerError> {
    let mut config = RunnerConfig::new(args.config, args.dry_run);
    if let Some(issue_url) = args.issue_url {
        config = config.with_issue_url(issue_url);
    }
    let runner = Runner::new(config)?;

    if args.list_ids {
        for id in runner.registry().fixable_ids() {
            println!("{id}");
        }
        return Ok(None);
    }

    // clap enforces both when --list-ids is absent
    let id = args.id.unwrap_or_default();
    let message = args.message.unwrap_or_default();
    let diagnostic =
        Diagnostic::new(id, message).with_span(SourceSpan::new(args.span_start, args.span_length));

    Ok(Some(runner.report(&diagnostic).await))
}

/// Prints the outcome of a report.
fn print_outcome(outcome: &ReportOutcome) {
    match outcome {
        ReportOutcome::Requested { url } => println!("Opened: {url}"),
        ReportOutcome::DryRun { url } => println!("{url}"),
        ReportOutcome::NotFixable { id } => {
            eprintln!("No report-issue fix is registered for diagnostic '{id}'")
        }
    }
}
