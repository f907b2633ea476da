//! Empty root invariant: every game starts from the empty board.

use super::super::{Board, GameSession};
use super::Invariant;

/// Invariant: history entry 0 is the empty board.
pub struct EmptyRootInvariant;

impl Invariant<GameSession> for EmptyRootInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history
            .first()
            .is_some_and(|entry| *entry.board() == Board::new())
    }

    fn description() -> &'static str {
        "History starts from the empty board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryEntry, Player, Position};

    #[test]
    fn test_new_session_holds() {
        assert!(EmptyRootInvariant::holds(&GameSession::new()));
    }

    #[test]
    fn test_marked_root_violates() {
        let mut session = GameSession::new();
        session.history[0] = HistoryEntry::new(Board::new().with_mark(Position::Center, Player::X));
        assert!(!EmptyRootInvariant::holds(&session));
    }

    #[test]
    fn test_missing_root_violates() {
        let mut session = GameSession::new();
        session.history.clear();
        assert!(!EmptyRootInvariant::holds(&session));
    }
}
