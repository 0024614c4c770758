//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI flags and sets up logging
//! - reads configuration from the environment
//! - runs one reconciliation pass against the GitHub project

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::config::Config;
use crate::data::GithubClient;
use crate::error::AppError;

pub mod batch;

pub use batch::BatchRunner;

/// Environment variable overriding the log filter (`tracing` directives).
pub const LOG_ENV: &str = "ESTIMATE_SYNC_LOG";

/// Entry point for the `estimate-sync` binary.
///
/// Per-item failures are logged and counted but still return `Ok`.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    init_tracing(cli.log_level())?;

    let config = Config::from_env()?;
    let client = GithubClient::new(&config)?;

    BatchRunner::new(&client, config.org.as_str(), config.project_number)
        .dry_run(cli.dry_run)
        .run()?;
    Ok(())
}

fn init_tracing(level: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::new(1, format!("Failed to initialize logging: {e}")))
}
