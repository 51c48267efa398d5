//! tsinit - interactive TypeScript project scaffolder
//!
//! This is the main entry point for the tsinit command-line interface.

mod cli;
mod commands;
mod output;
mod prompt;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    finish(commands::new::run(cli).await)
}

/// How a failed run was reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reported {
    Cancelled,
    Failed,
}

/// Map the run result to the process exit code; every error is non-zero
fn finish(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        }
    }
}

/// Print a terminal error; cancellation is reported as a plain notice
fn report(err: &anyhow::Error) -> Reported {
    match err.downcast_ref::<tsinit_projects::Error>() {
        Some(e) if e.is_cancelled() => {
            output::warning("Cancelled: no project was created");
            Reported::Cancelled
        }
        _ => {
            output::error(&format!("{:#}", err));
            Reported::Failed
        }
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Keep prompts uncluttered by default; RUST_LOG still applies
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
