//! Tic-tac-toe game logic with a time-travel move history.
//!
//! A [`GameSession`] keeps every board since the start of the game and a
//! pointer to the one being viewed. Players alternate by the parity of that
//! pointer, winners are found by scanning the eight fixed lines, and a move
//! made from an earlier board discards the boards that followed it.
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{GameSession, GameStatus, Player, Position};
//!
//! let mut session = GameSession::new();
//! for pos in [
//!     Position::TopLeft,
//!     Position::Center,
//!     Position::TopCenter,
//!     Position::BottomCenter,
//!     Position::TopRight,
//! ] {
//!     session.apply_move(pos);
//! }
//! assert_eq!(session.status(), GameStatus::Won(Player::X));
//!
//! // Look back at the board after O's first move.
//! session.jump_to(2);
//! assert_eq!(session.to_move(), Player::X);
//! assert_eq!(session.history_len(), 6);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod history;
mod position;
mod session;
mod status;
mod types;

pub mod invariants;
pub mod rules;

pub use action::{Move, MoveOutcome, Rejection};
pub use contracts::{CellIsEmpty, Contract, GameNotWon, LegalMove, MoveContract};
pub use history::HistoryEntry;
pub use invariants::{
    CursorInBoundsInvariant, EmptyRootInvariant, FrozenAfterWinInvariant, Invariant,
    InvariantSet, InvariantViolation, SessionInvariants, SingleStepInvariant,
};
pub use position::Position;
pub use session::GameSession;
pub use status::GameStatus;
pub use types::{Board, Player, Square};
