use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use distcheck_presence::{CheckConfig, ExpectedFileSet, PresenceChecker, report, resolve_base_dir};

#[derive(Parser)]
#[command(name = "distcheck")]
#[command(version)]
#[command(about = "Verify that a frontend build output directory contains index.html and error.html")]
struct Cli {}

/// Entry point for the pre-deployment presence check
///
/// Checks that `index.html` and `error.html` exist in the directory containing
/// this executable. Prints a confirmation on stdout and exits `0` when both are
/// present; otherwise prints the missing names on stderr and exits `1`.
///
/// Diagnostics are written to stderr through `tracing` and can be tuned with
/// `RUST_LOG` (default `warn` when unset); they never change the result.
///
/// # Returns
/// * `Ok(ExitCode)` - `0` if all required files exist, `1` if any are missing
/// * `Err(anyhow::Error)` - If the base directory cannot be resolved (exits `1`)
fn main() -> anyhow::Result<ExitCode> {
    let _cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = resolve_base_dir(None).context("locating the build output directory")?;
    tracing::debug!("checking required files in {}", base_dir.display());

    let config = CheckConfig::new(base_dir, ExpectedFileSet::frontend()?)?;
    let outcome = PresenceChecker::new(config).check();

    report::write_report(&outcome, &mut std::io::stdout(), &mut std::io::stderr())?;

    Ok(ExitCode::from(outcome.exit_code()))
}
