//! lift: multi-elevator dispatch simulator.
//!
//! Reads a building configuration and a passenger schedule, runs the
//! simulation to completion, and writes the passenger and elevator reports.
//! Exits with status 1 on any error.

use std::process::ExitCode;

use lift_cli::{CliArgs, TracingObserver, run};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = CliArgs::parse(std::env::args_os().skip(1)).and_then(|args| run(&args, TracingObserver));
    match result {
        Ok(summary) => {
            info!(delivered = summary.delivered, run_ticks = summary.run_ticks, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
