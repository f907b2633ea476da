//! Board snapshots that make up a game's history.

use super::Board;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One snapshot in a game's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The board after this entry's move (empty for entry 0).
    board: Board,
}

impl HistoryEntry {
    /// Wraps a board snapshot.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// The entry every game starts from.
    pub fn empty() -> Self {
        Self::new(Board::new())
    }
}
