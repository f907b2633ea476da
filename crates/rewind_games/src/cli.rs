//! Command-line interface for rewind.

use crate::config::HistoryLabelStyle;
use crate::replay::ReplayFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a browsable, branching move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Path to a TOML config file (falls back to $REWIND_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the history label style from the config
        #[arg(long, value_enum)]
        labels: Option<HistoryLabelStyle>,
    },

    /// Run a move script and print the resulting session
    Replay {
        /// Script text, e.g. "0 4 1 @2 8"
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        moves: Option<String>,

        /// Read the script from a file instead
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = ReplayFormat::Text)]
        format: ReplayFormat,

        /// Path to a TOML config file (falls back to $REWIND_CONFIG)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the history label style from the config
        #[arg(long, value_enum)]
        labels: Option<HistoryLabelStyle>,
    },
}
