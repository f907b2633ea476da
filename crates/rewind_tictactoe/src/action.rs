//! First-class action types for tic-tac-toe.
//!
//! Moves are domain events, not side effects. An attempted move either
//! places a mark or is ignored; ignoring is the game's only response to an
//! illegal click, so [`MoveOutcome`] is a report rather than an error.

use super::{Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why an attempted move left the session unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The board being viewed already has a winner.
    #[display("Game is already won by {}", _0)]
    GameWon(Player),

    /// A raw cell index outside 0-8.
    #[display("Cell index {} is off the board", _0)]
    OffBoard(usize),
}

/// What happened to an attempted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed and a new history entry appended.
    Placed(Move),
    /// The move was ignored; the session is unchanged.
    Ignored(Rejection),
}

impl MoveOutcome {
    /// True if the move changed the session.
    pub fn is_placed(&self) -> bool {
        matches!(self, MoveOutcome::Placed(_))
    }
}
