//! Cursor invariant: the current move names a stored entry.

use super::super::GameSession;
use super::Invariant;

/// Invariant: `current_move < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameSession> for CursorInBoundsInvariant {
    fn holds(session: &GameSession) -> bool {
        session.current_move < session.history.len()
    }

    fn description() -> &'static str {
        "Current move points inside history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_holds_after_jump() {
        let mut session = GameSession::replay(&[Position::TopLeft, Position::Center]);
        session.jump_to(0);
        assert!(CursorInBoundsInvariant::holds(&session));
    }

    #[test]
    fn test_past_end_violates() {
        let mut session = GameSession::new();
        session.current_move = 1;
        assert!(!CursorInBoundsInvariant::holds(&session));
    }
}
