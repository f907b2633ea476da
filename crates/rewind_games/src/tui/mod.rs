//! Terminal UI: play on the board, browse the history, jump back.

pub mod app;
pub mod input;
pub mod ui;

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{error, info, instrument, warn};

use crate::config::AppConfig;
use app::{App, Control};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Runs a restore action when dropped, including while a panic unwinds.
struct RestoreOnDrop<F: FnMut() -> io::Result<()>> {
    restore: F,
}

impl<F: FnMut() -> io::Result<()>> Drop for RestoreOnDrop<F> {
    fn drop(&mut self) {
        if let Err(e) = (self.restore)() {
            warn!(error = %e, "Failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Runs the interactive game until the user quits.
///
/// Logs go to the configured log file so they do not tear the screen. The
/// terminal leaves raw mode and the alternate screen on every exit path.
pub fn run_tui(config: AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(?config, "Starting Rewind TUI");

    enable_raw_mode()?;
    let _restore = RestoreOnDrop {
        restore: restore_terminal,
    };

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let res = run_loop(&mut terminal, App::new(config));
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

#[instrument(skip_all)]
fn run_loop(terminal: &mut CrosstermTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, &app))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        if app.handle_key(key.code) == Control::Quit {
            info!(entries = app.session().history_len(), "Quitting");
            return Ok(());
        }
    }
}
