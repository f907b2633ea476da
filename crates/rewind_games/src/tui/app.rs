//! Application state and key handling.

use super::input::{digit_cell, move_cursor};
use crate::config::AppConfig;
use crossterm::event::KeyCode;
use rewind_tictactoe::{GameSession, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// Which panel receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Arrows move the board cursor.
    Board,
    /// Arrows move the history selection.
    History,
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Redraw and keep reading keys.
    Continue,
    /// Leave the UI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    session: GameSession,
    config: AppConfig,
    cursor: Position,
    focus: Focus,
    selected: usize,
    notice: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: GameSession::new(),
            config,
            cursor: Position::Center,
            focus: Focus::Board,
            selected: 0,
            notice: None,
        }
    }

    /// The game being played.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Front-end settings.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving arrow keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Highlighted history entry.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Why the last key did nothing, if it did nothing.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Applies one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> Control {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                return Control::Quit;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::Board => Focus::History,
                    Focus::History => Focus::Board,
                };
                self.selected = self.session.current_move();
                self.notice = None;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => self.play(self.cursor),
                Focus::History => self.jump(self.selected),
            },
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                match self.focus {
                    Focus::Board => self.cursor = move_cursor(self.cursor, key),
                    Focus::History => self.move_selection(key),
                }
            }
            other => match digit_cell(other) {
                Some(position) => {
                    self.cursor = position;
                    self.play(position);
                }
                None => debug!(?other, "Unbound key"),
            },
        }
        Control::Continue
    }

    fn play(&mut self, position: Position) {
        match self.session.apply_move(position) {
            MoveOutcome::Placed(mov) => {
                debug!(%mov, "Move applied to UI state");
                self.selected = self.session.current_move();
                self.notice = None;
            }
            MoveOutcome::Ignored(rejection) => {
                self.notice = Some(rejection.to_string());
            }
        }
    }

    fn jump(&mut self, target: usize) {
        if self.session.can_jump_to(target) {
            self.session.jump_to(target);
            self.notice = None;
        }
    }

    fn move_selection(&mut self, key: KeyCode) {
        let last = self.session.history_len() - 1;
        self.selected = match key {
            KeyCode::Up | KeyCode::Left => self.selected.saturating_sub(1),
            KeyCode::Down | KeyCode::Right => (self.selected + 1).min(last),
            _ => self.selected,
        };
    }

    fn restart(&mut self) {
        self.session.restart();
        self.selected = 0;
        self.notice = Some("Game restarted".to_string());
    }
}
