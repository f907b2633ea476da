//! The game session: full history plus a movable read pointer.

use super::action::{Move, MoveOutcome, Rejection};
use super::contracts::{Contract, MoveContract};
use super::history::HistoryEntry;
use super::rules;
use super::status::GameStatus;
use super::{Board, Player, Position, Square};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// A game of tic-tac-toe with time travel.
///
/// Holds every board since the start of the game and the index of the one
/// currently being viewed. Jumping only moves that index. Playing from an
/// earlier entry drops everything after it before the new board is
/// appended.
///
/// Whose turn it is comes from the parity of `current_move` and is never
/// stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSession {
    pub(crate) history: Vec<HistoryEntry>,
    pub(crate) current_move: usize,
}

impl GameSession {
    /// Creates a session holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![HistoryEntry::empty()],
            current_move: 0,
        }
    }

    /// Plays each position in turn from a fresh session.
    ///
    /// Illegal positions are ignored exactly as [`GameSession::apply_move`]
    /// ignores them.
    #[instrument(skip(positions), fields(count = positions.len()))]
    pub fn replay(positions: &[Position]) -> Self {
        let mut session = Self::new();
        for pos in positions {
            session.apply_move(*pos);
        }
        session
    }

    /// All history entries, oldest first.
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Number of history entries (always at least 1).
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the entry being viewed.
    pub fn current_move(&self) -> usize {
        self.current_move
    }

    /// The board being viewed.
    pub fn current_board(&self) -> &Board {
        self.history[self.current_move].board()
    }

    /// The player whose turn it is at the current move.
    pub fn to_move(&self) -> Player {
        Player::for_move(self.current_move)
    }

    /// Status of the board being viewed.
    pub fn status(&self) -> GameStatus {
        match rules::check_winner(self.current_board()) {
            Some(player) => GameStatus::Won(player),
            None => GameStatus::InProgress {
                to_move: self.to_move(),
            },
        }
    }

    /// The winner on the board being viewed.
    pub fn winner(&self) -> Option<Player> {
        self.status().winner()
    }

    /// True if the board being viewed is full with no line.
    pub fn is_draw(&self) -> bool {
        rules::is_draw(self.current_board())
    }

    /// True if the current move is the newest entry.
    pub fn is_at_tail(&self) -> bool {
        self.current_move + 1 == self.history.len()
    }

    /// True if `target` names an existing history entry.
    pub fn can_jump_to(&self, target: usize) -> bool {
        target < self.history.len()
    }

    /// Cells that would accept a mark right now.
    ///
    /// Empty once the viewed board has a winner.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.winner().is_some() {
            return Vec::new();
        }
        Position::valid_moves(self.current_board())
    }

    /// Places the current player's mark at `position`.
    ///
    /// Ignored, leaving the session untouched, when the square is taken or
    /// the viewed board already has a winner. Otherwise every entry after
    /// the current move is discarded, the new board is appended, and the
    /// current move advances to it.
    #[instrument(skip(self), fields(current_move = self.current_move, to_move = %self.to_move()))]
    pub fn apply_move(&mut self, position: Position) -> MoveOutcome {
        if let Err(rejection) = MoveContract::pre(self, &position) {
            debug!(%rejection, "Ignoring move");
            return MoveOutcome::Ignored(rejection);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.to_move();
        let board = self.current_board().with_mark(position, player);
        let discarded = self.history.len() - (self.current_move + 1);
        self.history.truncate(self.current_move + 1);
        self.history.push(HistoryEntry::new(board));
        self.current_move = self.history.len() - 1;

        debug!(
            %player,
            %position,
            discarded,
            current_move = self.current_move,
            "Move placed"
        );

        #[cfg(debug_assertions)]
        {
            let verdict = MoveContract::post(&before, self);
            debug_assert!(verdict.is_ok(), "Move postcondition failed: {:?}", verdict);
        }

        MoveOutcome::Placed(Move::new(player, position))
    }

    /// Places a mark by raw cell index (0-8).
    ///
    /// Indices off the board are ignored like any other illegal move.
    #[instrument(skip(self))]
    pub fn apply_index(&mut self, index: usize) -> MoveOutcome {
        match Position::from_index(index) {
            Some(position) => self.apply_move(position),
            None => {
                debug!(index, "Ignoring off-board index");
                MoveOutcome::Ignored(Rejection::OffBoard(index))
            }
        }
    }

    /// Views history entry `target` without changing history.
    ///
    /// # Panics
    ///
    /// If `target` is not an existing entry. Callers offer only valid
    /// entries; check [`GameSession::can_jump_to`] when the index comes
    /// from user input.
    #[instrument(skip(self), fields(from = self.current_move))]
    pub fn jump_to(&mut self, target: usize) {
        assert!(
            self.can_jump_to(target),
            "jump target {} outside history of {} entries",
            target,
            self.history.len()
        );
        self.current_move = target;
        debug!(to_move = %self.to_move(), "Jumped");
    }

    /// Throws the game away and starts over.
    #[instrument(skip(self), fields(entries = self.history.len()))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        *self = Self::new();
    }

    /// The move that produced history entry `index`.
    ///
    /// `None` for entry 0 and for indices past the end.
    pub fn move_at(&self, index: usize) -> Option<Move> {
        if index == 0 {
            return None;
        }
        let before = self.history.get(index - 1)?.board();
        let after = self.history.get(index)?.board();
        Position::ALL.iter().find_map(|pos| {
            match (before.get(*pos), after.get(*pos)) {
                (Square::Empty, Square::Occupied(player)) => Some(Move::new(player, *pos)),
                _ => None,
            }
        })
    }

    /// Every move along the stored history, oldest first.
    pub fn moves(&self) -> Vec<Move> {
        (1..self.history.len())
            .filter_map(|index| self.move_at(index))
            .collect()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
