//! Tests for game session history, time travel and branching.

use rewind_tictactoe::{
    GameSession, GameStatus, InvariantSet, Move, MoveOutcome, Player, Position, Rejection,
    SessionInvariants, rules,
};

fn session_after(cells: &[usize]) -> GameSession {
    let mut session = GameSession::new();
    for cell in cells {
        assert!(
            session.apply_index(*cell).is_placed(),
            "cell {} should be playable",
            cell
        );
    }
    session
}

#[test]
fn test_top_row_win_then_frozen() {
    let mut session = session_after(&[0, 4, 1, 7, 2]);

    assert_eq!(rules::check_winner(session.current_board()), Some(Player::X));
    assert_eq!(
        rules::winning_line(session.current_board()).map(|(_, line)| line),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert_eq!(session.status(), GameStatus::Won(Player::X));

    let before = session.clone();
    for pos in Position::valid_moves(session.current_board()) {
        assert_eq!(
            session.apply_move(pos),
            MoveOutcome::Ignored(Rejection::GameWon(Player::X))
        );
        assert_eq!(session, before);
    }
}

#[test]
fn test_full_board_without_line_has_no_winner() {
    // X O X / X O O / O X X
    let session = session_after(&[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(session.history_len(), 10);
    assert_eq!(session.winner(), None);
    assert!(session.is_draw());
    // Status stays two-valued: a drawn board still reads as in progress.
    assert_eq!(
        session.status(),
        GameStatus::InProgress { to_move: Player::O }
    );
    assert!(session.valid_moves().is_empty());
}

#[test]
fn test_branching_discards_future() {
    let mut session = session_after(&[0, 4, 1, 7]);
    assert_eq!(session.history_len(), 5);
    let kept = session.history()[..3].to_vec();

    session.jump_to(2);
    assert_eq!(session.history_len(), 5);

    let outcome = session.apply_move(Position::BottomRight);
    assert_eq!(
        outcome,
        MoveOutcome::Placed(Move::new(Player::X, Position::BottomRight))
    );
    assert_eq!(session.history_len(), 4);
    assert_eq!(session.current_move(), 3);
    assert_eq!(&session.history()[..3], kept.as_slice());
    assert_eq!(
        session.moves(),
        vec![
            Move::new(Player::X, Position::TopLeft),
            Move::new(Player::O, Position::Center),
            Move::new(Player::X, Position::BottomRight),
        ]
    );
}

#[test]
fn test_jump_back_reopens_won_game() {
    let mut session = session_after(&[0, 4, 1, 7, 2]);
    session.jump_to(4);

    assert_eq!(session.status(), GameStatus::InProgress { to_move: Player::X });
    assert!(session.apply_move(Position::BottomRight).is_placed());
    assert_eq!(session.history_len(), 6);
    assert_eq!(session.winner(), None);
}

#[test]
fn test_jump_parity() {
    let mut session = session_after(&[0, 4, 1, 7]);
    for target in 0..session.history_len() {
        session.jump_to(target);
        let expected = if target % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(session.to_move(), expected);
        assert_eq!(session.status(), GameStatus::InProgress { to_move: expected });
    }
}

#[test]
fn test_occupied_in_past_board_only_checks_viewed_board() {
    let mut session = session_after(&[0, 4]);
    session.jump_to(1);

    // Center is taken at the tail but free on the viewed board.
    assert!(session.apply_move(Position::Center).is_placed());
    assert_eq!(session.history_len(), 3);
    assert_eq!(
        session.move_at(2),
        Some(Move::new(Player::O, Position::Center))
    );
}

#[test]
fn test_invariants_hold_through_a_long_game() {
    let mut session = session_after(&[4, 0, 8]);
    session.jump_to(1);
    session.apply_index(2);
    session.jump_to(0);
    session.apply_index(6);
    session.apply_index(6);
    session.apply_index(3);

    assert!(SessionInvariants::check_all(&session).is_ok());
    assert_eq!(session.history_len(), 3);
}

#[test]
fn test_snapshot_serializes() {
    let session = session_after(&[4]);
    let json = serde_json::to_value(&session).expect("session serializes");

    assert_eq!(json["current_move"], 1);
    assert_eq!(json["history"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["history"][1]["board"]["squares"][4]["Occupied"], "X");
}
