//! Non-interactive report of a session, as text or JSON.

use crate::config::AppConfig;
use crate::view;
use rewind_tictactoe::{GameSession, Player};
use serde::Serialize;
use tracing::instrument;

/// Output format for `rewind replay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReplayFormat {
    /// Board drawing, status line and history list.
    #[default]
    Text,
    /// The full session snapshot plus derived fields.
    Json,
}

/// JSON shape of a replay report.
#[derive(Debug, Serialize)]
pub struct ReplayReport<'a> {
    /// Status line as the terminal UI would show it.
    pub status: String,
    /// Winner on the viewed board.
    pub winner: Option<Player>,
    /// Full board with no winner.
    pub draw: bool,
    /// History labels, oldest first.
    pub labels: Vec<String>,
    /// The session itself.
    pub session: &'a GameSession,
}

impl<'a> ReplayReport<'a> {
    /// Derives the report for a session.
    pub fn new(session: &'a GameSession, config: &AppConfig) -> Self {
        Self {
            status: view::status_line(session, config),
            winner: session.winner(),
            draw: session.is_draw(),
            labels: view::history_labels(session, *config.history_labels()),
            session,
        }
    }
}

/// Renders the session in the requested format.
#[instrument(skip(session, config))]
pub fn render(
    session: &GameSession,
    config: &AppConfig,
    format: ReplayFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReplayFormat::Text => Ok(render_text(session, config)),
        ReplayFormat::Json => serde_json::to_string_pretty(&ReplayReport::new(session, config)),
    }
}

fn render_text(session: &GameSession, config: &AppConfig) -> String {
    let mut out = String::new();
    out.push_str(&session.current_board().display());
    out.push_str("\n\n");
    out.push_str(&view::status_line(session, config));
    out.push_str("\n\nHistory:\n");
    for index in 0..session.history_len() {
        let marker = if index == session.current_move() { '>' } else { ' ' };
        out.push_str(&format!(
            "{} {}. {}\n",
            marker,
            index + 1,
            view::history_detail(session, index, *config.history_labels())
        ));
    }
    out
}
