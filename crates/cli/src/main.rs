mod cli;

use std::io::Write;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use pgpeek_core::{CheckError, EnvFile};
use pgpeek_probe::{check_table, Console, PgCatalog, TableCatalog};

use crate::cli::CliArgs;

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout stays the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let mut console = Console::stdio();

    match run(&args, &mut console).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = exit_code(&err);
            // A console write failure here has nowhere left to be reported.
            let _ = report_failure(&err, &mut console);
            ExitCode::from(code)
        }
    }
}

/// Load config, connect, check, report, close.
async fn run<O: Write, E: Write>(args: &CliArgs, console: &mut Console<O, E>) -> Result<()> {
    let target = args.target();
    target.validate()?;

    let env = EnvFile::load(&target.env_file)?;
    let url = env.require(&target.url_key)?;
    debug!(env_file = %env.path().display(), keys = env.len(), "configuration loaded");

    let mut catalog = PgCatalog::connect(url)
        .await
        .context("failed to connect to database")?;

    let outcome = check_table(&mut catalog, &target).await?;
    console
        .report(&target, &outcome)
        .context("failed to write report")?;

    catalog
        .close()
        .await
        .context("failed to close database connection")?;
    info!(table = %target.table, "check complete");
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<CheckError>()
        .map(CheckError::exit_code)
        .unwrap_or(1)
}

fn report_failure<O: Write, E: Write>(
    err: &anyhow::Error,
    console: &mut Console<O, E>,
) -> std::io::Result<()> {
    match err.downcast_ref::<CheckError>() {
        Some(missing @ CheckError::MissingKey { .. }) => console.plain_error(&missing.to_string()),
        _ => console.error(&render_chain(err)),
    }
}

/// One-line message for an error and its causes.
///
/// Several error types already embed their cause in their own message, so a
/// cause is appended only when the previous message does not already end
/// with it.
fn render_chain(err: &anyhow::Error) -> String {
    let mut message = err.to_string();
    let mut previous = message.clone();
    for cause in err.chain().skip(1) {
        let text = cause.to_string();
        if !previous.ends_with(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        previous = text;
    }
    message
}
