//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style: {P} action {Q}. A failed precondition means the
//! move is ignored; a failed postcondition means the engine itself is
//! broken.

use super::action::Rejection;
use super::invariants::{InvariantSet, InvariantViolation, SessionInvariants};
use super::rules;
use super::session::GameSession;
use super::Position;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), Rejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Precondition: the square at the move's position must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Checks the square on the viewed board.
    #[instrument(skip(session))]
    pub fn check(position: Position, session: &GameSession) -> Result<(), Rejection> {
        if session.current_board().is_empty(position) {
            Ok(())
        } else {
            Err(Rejection::SquareOccupied(position))
        }
    }
}

/// Precondition: the viewed board must not have a winner yet.
pub struct GameNotWon;

impl GameNotWon {
    /// Checks the viewed board for a completed line.
    #[instrument(skip(session))]
    pub fn check(session: &GameSession) -> Result<(), Rejection> {
        match rules::check_winner(session.current_board()) {
            Some(winner) => Err(Rejection::GameWon(winner)),
            None => Ok(()),
        }
    }
}

/// Composite precondition: the game is still open and the square is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(position: Position, session: &GameSession) -> Result<(), Rejection> {
        GameNotWon::check(session)?;
        CellIsEmpty::check(position, session)?;
        Ok(())
    }
}

/// Contract for placing a mark.
///
/// Preconditions:
/// - Viewed board has no winner
/// - Square is empty
///
/// Postconditions:
/// - History was cut just after the old current move and grew by one
/// - Current move points at the new tail
/// - All session invariants hold
pub struct MoveContract;

impl Contract<GameSession, Position> for MoveContract {
    fn pre(session: &GameSession, position: &Position) -> Result<(), Rejection> {
        LegalMove::check(*position, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let expected_len = before.current_move() + 2;
        if after.history_len() != expected_len {
            warn!(
                expected_len,
                actual_len = after.history_len(),
                "History did not grow by exactly one entry"
            );
            violations.push(InvariantViolation::new(
                "History is truncated to the current move and grows by one",
            ));
        }

        if !after.is_at_tail() {
            violations.push(InvariantViolation::new(
                "Current move points at the newest entry after a move",
            ));
        }

        let kept = ..before.current_move() + 1;
        if after.history().get(kept) != before.history().get(kept) {
            violations.push(InvariantViolation::new(
                "Entries up to the current move are preserved",
            ));
        }

        if let Err(mut broken) = SessionInvariants::check_all(after) {
            violations.append(&mut broken);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HistoryEntry, Player};

    #[test]
    fn test_precondition_empty_square() {
        let session = GameSession::new();
        assert!(MoveContract::pre(&session, &Position::Center).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let session = GameSession::replay(&[Position::Center]);
        assert_eq!(
            MoveContract::pre(&session, &Position::Center),
            Err(Rejection::SquareOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_won_game_reported_first() {
        let session = GameSession::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomCenter,
            Position::TopRight,
        ]);
        // Occupied and won: the win is what gets reported.
        assert_eq!(
            MoveContract::pre(&session, &Position::TopLeft),
            Err(Rejection::GameWon(Player::X))
        );
        assert_eq!(
            MoveContract::pre(&session, &Position::BottomRight),
            Err(Rejection::GameWon(Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameSession::replay(&[Position::TopLeft, Position::Center]);
        let mut after = before.clone();
        after.apply_move(Position::BottomRight);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_holds_after_branch() {
        let mut before =
            GameSession::replay(&[Position::TopLeft, Position::Center, Position::TopRight]);
        before.jump_to(1);
        let mut after = before.clone();
        after.apply_move(Position::BottomRight);
        assert_eq!(after.history_len(), 3);
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameSession::new();
        let mut after = before.clone();
        after.apply_move(Position::Center);

        // Overwrite the new entry with a board that skipped a turn.
        after.history[1] = HistoryEntry::new(
            before
                .current_board()
                .with_mark(Position::Center, Player::O),
        );

        assert!(MoveContract::post(&before, &after).is_err());
    }
}
