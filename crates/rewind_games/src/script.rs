//! Replay scripts: a game written down as a list of moves and jumps.
//!
//! Tokens are separated by whitespace or commas; `#` starts a comment that
//! runs to the end of the line.
//!
//! - `0`-`8` or a position label (`center`, `top-left`, `bottom_right`)
//!   plays that cell
//! - `@N` jumps to history entry N
//! - `restart` starts a fresh game

use derive_more::{Display, Error};
use rewind_tictactoe::{GameSession, MoveOutcome, Position};
use tracing::{debug, info, instrument};

/// One step of a replay script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptStep {
    /// Play the current player's mark at a cell.
    Play(Position),
    /// View history entry N.
    Jump(usize),
    /// Start over from the empty board.
    Restart,
}

/// Malformed script or an impossible jump.
#[derive(Debug, Clone, Display, Error)]
#[display("Script error: {} at {}:{}", message, file, line)]
pub struct ScriptError {
    /// Error message.
    pub message: String,
    /// Zero-based index of the offending token.
    pub token: usize,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ScriptError {
    /// Creates a new script error for the token at `token`.
    #[track_caller]
    pub fn new(token: usize, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            token,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Splits script text into tokens, dropping comments.
fn tokens(source: &str) -> impl Iterator<Item = &str> {
    source
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(code, _)| code))
        .flat_map(|line| line.split(|c: char| c.is_whitespace() || c == ','))
        .filter(|token| !token.is_empty())
}

/// Parses a single token.
#[instrument]
fn parse_step(index: usize, token: &str) -> Result<ScriptStep, ScriptError> {
    if let Some(target) = token.strip_prefix('@') {
        return target.parse::<usize>().map(ScriptStep::Jump).map_err(|_| {
            ScriptError::new(index, format!("Token {} ({:?}): jump needs a number", index, token))
        });
    }

    if token.eq_ignore_ascii_case("restart") {
        return Ok(ScriptStep::Restart);
    }

    Position::from_label_or_number(token).map(ScriptStep::Play).ok_or_else(|| {
        ScriptError::new(
            index,
            format!("Token {} ({:?}): not a cell, jump or restart", index, token),
        )
    })
}

/// Parses script text into steps.
#[instrument(skip(source), fields(len = source.len()))]
pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, ScriptError> {
    let steps = tokens(source)
        .enumerate()
        .map(|(index, token)| parse_step(index, token))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(steps = steps.len(), "Parsed script");
    Ok(steps)
}

/// Runs steps against a fresh session.
///
/// Illegal moves are ignored just as in interactive play. A jump past the
/// end of history as it stands at that step is an error.
#[instrument(skip(steps), fields(steps = steps.len()))]
pub fn run_script(steps: &[ScriptStep]) -> Result<GameSession, ScriptError> {
    let mut session = GameSession::new();

    for (index, step) in steps.iter().enumerate() {
        match *step {
            ScriptStep::Play(position) => {
                if let MoveOutcome::Ignored(rejection) = session.apply_move(position) {
                    info!(index, %position, %rejection, "Script move ignored");
                }
            }
            ScriptStep::Jump(target) => {
                if !session.can_jump_to(target) {
                    return Err(ScriptError::new(
                        index,
                        format!(
                            "Step {}: cannot jump to @{} with {} history entries",
                            index,
                            target,
                            session.history_len()
                        ),
                    ));
                }
                session.jump_to(target);
            }
            ScriptStep::Restart => session.restart(),
        }
    }

    Ok(session)
}
