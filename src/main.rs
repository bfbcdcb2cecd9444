mod cli;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use template_validator::config::Settings;
use template_validator::error::CheckError;
use template_validator::report::{self, Report};
use template_validator::scan;

const EXIT_INVALID: u8 = 1;
const EXIT_FATAL: u8 = 2;

fn run(args: &cli::Args) -> Result<Report, CheckError> {
    let settings = Settings::load(&args.settings)?;
    debug!(folders = settings.folders.len(), "settings loaded");
    Ok(Report::new(scan::scan(&settings)?))
}

fn emit(text: &str) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(text.as_bytes())
        .context("failed to write report to stdout")?;
    stdout.flush().context("failed to flush stdout")
}

fn main() -> Result<ExitCode> {
    let args = cli::Args::parse();

    // RUST_LOG wins over --verbose
    let env_filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if args.verbose {
        EnvFilter::new("template_validator=debug,validate_templates=debug")
    } else {
        EnvFilter::new("template_validator=info,validate_templates=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let report = match run(&args) {
        Ok(report) => report,
        Err(error) => {
            tracing::error!(%error, "validation run aborted");
            emit(&report::render_fatal(&error, args.format))?;
            return Ok(ExitCode::from(EXIT_FATAL));
        }
    };

    emit(&report.render(args.format).context("failed to render report")?)?;

    if report.is_success() {
        info!("{}", report::SUCCESS_MESSAGE);
        Ok(ExitCode::SUCCESS)
    } else {
        info!("{}", report.summary());
        Ok(ExitCode::from(EXIT_INVALID))
    }
}
