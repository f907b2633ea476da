//! Frozen after win invariant: nothing follows a winning board.

use super::super::{GameSession, rules};
use super::Invariant;

/// Invariant: only the last history entry may hold a completed line.
pub struct FrozenAfterWinInvariant;

impl Invariant<GameSession> for FrozenAfterWinInvariant {
    fn holds(session: &GameSession) -> bool {
        let Some((_, earlier)) = session.history.split_last() else {
            return true;
        };
        earlier
            .iter()
            .all(|entry| rules::check_winner(entry.board()).is_none())
    }

    fn description() -> &'static str {
        "No history entry follows a won board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryEntry, Player, Position};

    fn won() -> GameSession {
        GameSession::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomCenter,
            Position::TopRight,
        ])
    }

    #[test]
    fn test_won_tail_holds() {
        assert!(FrozenAfterWinInvariant::holds(&won()));
    }

    #[test]
    fn test_entry_after_win_violates() {
        let mut session = won();
        let extra = session.history[5]
            .board()
            .with_mark(Position::BottomRight, Player::O);
        session.history.push(HistoryEntry::new(extra));
        assert!(!FrozenAfterWinInvariant::holds(&session));
    }
}
