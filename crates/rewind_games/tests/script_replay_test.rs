//! Scripts driven end to end through the engine and the report renderer.

use rewind_games::{
    AppConfig, HistoryLabelStyle, ReplayFormat, parse_script, render, run_script,
};
use rewind_tictactoe::{GameStatus, Player, Position};

fn replay(source: &str) -> rewind_tictactoe::GameSession {
    let steps = parse_script(source).expect("script parses");
    run_script(&steps).expect("script runs")
}

#[test]
fn test_winning_script_report() {
    let session = replay("top-left center top-center bottom-center top-right");
    let text = render(&session, &AppConfig::default(), ReplayFormat::Text).expect("renders");

    assert!(text.starts_with("X|X|X\n-+-+-\n4|O|6\n-+-+-\n7|O|9"));
    assert!(text.contains("\n\nWinner: X\n"));
    assert!(text.contains("> 6. Move 6 (X -> Top-right)\n"));
}

#[test]
fn test_moves_after_win_are_ignored() {
    let session = replay("0 4 1 7 2 8 5");
    assert_eq!(session.history_len(), 6);
    assert_eq!(session.winner(), Some(Player::X));
}

#[test]
fn test_jump_then_branch_discards_future() {
    let session = replay("0 4 1 7 @2 8");

    assert_eq!(session.history_len(), 4);
    assert_eq!(session.current_move(), 3);
    assert_eq!(session.move_at(3).map(|m| m.position()), Some(Position::BottomRight));
    assert_eq!(session.status(), GameStatus::InProgress { to_move: Player::O });
}

#[test]
fn test_jump_back_keeps_future_for_viewing() {
    let session = replay("0 4 1 7 2 @1");
    let text = render(&session, &AppConfig::default(), ReplayFormat::Text).expect("renders");

    assert_eq!(session.history_len(), 6);
    assert!(text.contains("Next player: O"));
    assert!(text.contains("> 2. Move 2 (X -> Top-left)\n"));
    assert!(text.contains("  6. Move 6 (X -> Top-right)\n"));
}

#[test]
fn test_draw_announcement_is_configurable() {
    let session = replay("0 1 2 4 3 5 7 6 8");

    let announced = render(&session, &AppConfig::default(), ReplayFormat::Text).expect("renders");
    assert!(announced.contains("\n\nDraw\n"));

    let quiet = AppConfig::default().with_announce_draw(false);
    let plain = render(&session, &quiet, ReplayFormat::Text).expect("renders");
    assert!(plain.contains("\n\nNext player: O\n"));
}

#[test]
fn test_json_report_with_letter_labels() {
    let session = replay("4 0");
    let config = AppConfig::default().with_history_labels(HistoryLabelStyle::Letters);
    let json = render(&session, &config, ReplayFormat::Json).expect("renders");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["labels"], serde_json::json!(["a", "b", "b"]));
    assert_eq!(value["status"], "Next player: X");
    assert_eq!(value["session"]["history"].as_array().map(Vec::len), Some(3));
}

#[test]
fn test_script_from_file() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "# opening\n4, 0\n\n@0 # back to the start\n8").expect("write script");

    let source = std::fs::read_to_string(file.path()).expect("read script");
    let session = replay(&source);
    assert_eq!(session.history_len(), 2);
    assert_eq!(session.move_at(1).map(|m| m.player()), Some(Player::X));
}

#[test]
fn test_bad_jump_reports_step() {
    let steps = parse_script("0 @5").expect("script parses");
    let err = run_script(&steps).expect_err("jump is out of range");
    assert_eq!(err.token, 1);
    assert!(err.to_string().starts_with("Script error:"));
}
