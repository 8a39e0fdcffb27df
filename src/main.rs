//! Terminal tic-tac-toe with move history and time-travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Tic-tac-toe with a move list you can rewind.
#[derive(Parser, Debug)]
#[command(name = "tictactoe-rewind")]
#[command(about = "Terminal tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
struct Cli {
    /// Log file path. Logs go to a file so they never tear the TUI.
    #[arg(long, default_value = "tictactoe_rewind.log")]
    log_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("starting tictactoe-rewind");
    tictactoe_rewind::tui::run()
}
