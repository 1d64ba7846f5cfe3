//! Tictac - terminal tic-tac-toe for two players sharing a keyboard.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use tictac::{Settings, StdConsole, run_session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = cli.settings().context("Failed to load settings")?;
    init_tracing(&settings);

    info!(?settings, "Starting tictac");
    let mut console = StdConsole::stdio();
    let summary = run_session(&mut console, &settings)?;
    info!(matches = summary.matches(), "Goodbye");

    Ok(())
}

/// Logs go to stderr so they never interleave with the game on stdout.
fn init_tracing(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
}
