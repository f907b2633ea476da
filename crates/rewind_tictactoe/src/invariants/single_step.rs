//! Single step invariant: each entry adds exactly one mark, in turn order.

use super::super::{GameSession, Player, Square};
use super::Invariant;

/// Invariant: consecutive entries differ by one newly filled square.
///
/// Entry `i` fills a square that was empty in entry `i - 1`, with X when
/// `i - 1` is even and O when it is odd. Nothing else changes, so marks
/// are never overwritten and players strictly alternate.
pub struct SingleStepInvariant;

impl Invariant<GameSession> for SingleStepInvariant {
    fn holds(session: &GameSession) -> bool {
        session
            .history
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let mover = Player::for_move(step);
                let changed: Vec<(Square, Square)> = pair[0]
                    .board()
                    .squares()
                    .iter()
                    .zip(pair[1].board().squares())
                    .filter(|(before, after)| before != after)
                    .map(|(before, after)| (*before, *after))
                    .collect();

                matches!(
                    changed.as_slice(),
                    [(Square::Empty, Square::Occupied(player))] if *player == mover
                )
            })
    }

    fn description() -> &'static str {
        "Each entry adds one mark for the player whose turn it was"
    }
}
