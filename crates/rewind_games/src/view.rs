//! Text a front-end shows for a session: status line, history labels, cells.
//!
//! Everything here is a pure function of the session and the config, so
//! every front-end renders the same words.

use crate::config::{AppConfig, HistoryLabelStyle};
use rewind_tictactoe::{GameSession, Player, Square};

/// Status line for the board being viewed.
///
/// "Winner: X" or "Next player: O". With `announce_draw` set, a full board
/// without a winner reads "Draw" instead.
pub fn status_line(session: &GameSession, config: &AppConfig) -> String {
    if *config.announce_draw() && session.is_draw() {
        return "Draw".to_string();
    }
    session.status().to_string()
}

/// Label for history entry `index`.
///
/// Descriptive labels read "Restart" for entry 0 and "Move N+1" for entry N.
pub fn history_label(index: usize, style: HistoryLabelStyle) -> String {
    match (style, index) {
        (HistoryLabelStyle::Descriptive, 0) => "Restart".to_string(),
        (HistoryLabelStyle::Descriptive, n) => format!("Move {}", n + 1),
        (HistoryLabelStyle::Letters, 0) => "a".to_string(),
        (HistoryLabelStyle::Letters, _) => "b".to_string(),
    }
}

/// Labels for every history entry, oldest first.
pub fn history_labels(session: &GameSession, style: HistoryLabelStyle) -> Vec<String> {
    (0..session.history_len())
        .map(|index| history_label(index, style))
        .collect()
}

/// Longer description of an entry: its label plus the move that made it.
pub fn history_detail(session: &GameSession, index: usize, style: HistoryLabelStyle) -> String {
    let label = history_label(index, style);
    match session.move_at(index) {
        Some(mov) => format!("{} ({})", label, mov),
        None => label,
    }
}

/// Mark shown in a cell.
pub fn square_symbol(square: Square) -> &'static str {
    match square {
        Square::Empty => " ",
        Square::Occupied(Player::X) => "X",
        Square::Occupied(Player::O) => "O",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::Position;

    fn drawn() -> GameSession {
        let mut session = GameSession::new();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.apply_index(cell);
        }
        session
    }

    #[test]
    fn test_status_next_player() {
        let config = AppConfig::default();
        let mut session = GameSession::new();
        assert_eq!(status_line(&session, &config), "Next player: X");
        session.apply_move(Position::Center);
        assert_eq!(status_line(&session, &config), "Next player: O");
    }

    #[test]
    fn test_status_winner() {
        let session = GameSession::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomCenter,
            Position::TopRight,
        ]);
        assert_eq!(status_line(&session, &AppConfig::default()), "Winner: X");
    }

    #[test]
    fn test_status_draw_follows_config() {
        let session = drawn();
        let announce = AppConfig::default();
        let silent = AppConfig::default().with_announce_draw(false);

        assert_eq!(status_line(&session, &announce), "Draw");
        assert_eq!(status_line(&session, &silent), "Next player: O");
    }

    #[test]
    fn test_descriptive_labels() {
        let session = GameSession::replay(&[Position::TopLeft, Position::Center]);
        assert_eq!(
            history_labels(&session, HistoryLabelStyle::Descriptive),
            vec!["Restart", "Move 2", "Move 3"]
        );
    }

    #[test]
    fn test_letter_labels() {
        let session = GameSession::replay(&[Position::TopLeft, Position::Center]);
        assert_eq!(
            history_labels(&session, HistoryLabelStyle::Letters),
            vec!["a", "b", "b"]
        );
    }

    #[test]
    fn test_history_detail() {
        let session = GameSession::replay(&[Position::TopLeft]);
        assert_eq!(
            history_detail(&session, 0, HistoryLabelStyle::Descriptive),
            "Restart"
        );
        assert_eq!(
            history_detail(&session, 1, HistoryLabelStyle::Descriptive),
            "Move 2 (X -> Top-left)"
        );
    }

    #[test]
    fn test_square_symbol() {
        assert_eq!(square_symbol(Square::Empty), " ");
        assert_eq!(square_symbol(Square::Occupied(Player::O)), "O");
    }
}
