//! Derived game status.

use super::Player;
use serde::{Deserialize, Serialize};

/// Status of the board currently being viewed.
///
/// Never stored: a session computes it from the board at its current move
/// each time it is asked. A full board without a line still reports
/// `InProgress`; use [`crate::rules::is_draw`] to tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// No line completed yet.
    InProgress {
        /// The player whose mark goes down next.
        to_move: Player,
    },
    /// A line is complete.
    Won(Player),
}

impl GameStatus {
    /// The winner, if any.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(*player),
            GameStatus::InProgress { .. } => None,
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { to_move } => write!(f, "Next player: {}", to_move),
            GameStatus::Won(player) => write!(f, "Winner: {}", player),
        }
    }
}
