//! Rewind - tic-tac-toe with time travel.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use rewind_games::cli::{Cli, Command};
use rewind_games::{AppConfig, HistoryLabelStyle, ReplayFormat, replay, script, tui};
use std::path::{Path, PathBuf};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, fmt::MakeWriter};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, labels } => {
            // The TUI installs its file logger once the config names the file;
            // until then config loading logs to stderr.
            let config = tracing::subscriber::with_default(
                log_subscriber(std::io::stderr, env_filter("warn")),
                || load_config(config.as_deref(), labels),
            )?;
            tui::run_tui(config)
        }
        Command::Replay {
            moves,
            file,
            format,
            config,
            labels,
        } => {
            tracing::subscriber::set_global_default(log_subscriber(
                std::io::stderr,
                env_filter("warn"),
            ))?;
            let config = load_config(config.as_deref(), labels)?;
            run_replay(moves, file, format, config)
        }
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

fn log_subscriber<W>(writer: W, filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(writer)
        .finish()
}

#[instrument]
fn load_config(path: Option<&Path>, labels: Option<HistoryLabelStyle>) -> Result<AppConfig> {
    let config = AppConfig::load(path)?;
    Ok(match labels {
        Some(style) => config.with_history_labels(style),
        None => config,
    })
}

/// Run a script and print the session it leaves behind
#[instrument(skip(moves, config))]
fn run_replay(
    moves: Option<String>,
    file: Option<PathBuf>,
    format: ReplayFormat,
    config: AppConfig,
) -> Result<()> {
    let source = match (moves, file) {
        (Some(moves), _) => moves,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read script {}", path.display()))?,
        (None, None) => anyhow::bail!("No script given"),
    };

    let steps = script::parse_script(&source)?;
    let session = script::run_script(&steps)?;
    info!(entries = session.history_len(), current = session.current_move(), "Script finished");

    println!("{}", replay::render(&session, &config, format)?);
    Ok(())
}
