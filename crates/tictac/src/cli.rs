//! Command-line interface for tictac.

use clap::Parser;
use std::path::PathBuf;
use tictac::{ConfigError, Settings};
use tracing::instrument;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (logs go to stderr)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_banner: bool,
}

impl Cli {
    /// Resolves settings: defaults, then the config file, then flags.
    #[instrument(skip(self))]
    pub fn settings(&self) -> Result<Settings, ConfigError> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::new(),
        };
        if let Some(filter) = &self.log_filter {
            settings = settings.with_log_filter(filter.clone());
        }
        if self.no_banner {
            settings = settings.with_show_banner(false);
        }
        Ok(settings)
    }
}
