//! Snapshot tests - the data a presentation layer redraws from

use connect_four::core::snapshot::{CELL_EMPTY, CELL_FIRST, CELL_SECOND};
use connect_four::core::GameSnapshot;
use connect_four::new_game;

#[test]
fn snapshot_of_new_game() {
    let snap = new_game().snapshot();

    assert_eq!(snap.width, 7);
    assert_eq!(snap.height, 6);
    assert_eq!(snap.board.len(), 6);
    assert!(snap.board.iter().all(|row| row.len() == 7));
    assert!(snap.board.iter().flatten().all(|&code| code == CELL_EMPTY));
    assert_eq!(snap.status, "in_progress");
    assert_eq!(snap.current_player.as_deref(), Some("first"));
    assert_eq!(snap.winner, None);
    assert!(snap.winning_line.is_empty());
    assert!(snap.playable());
}

#[test]
fn snapshot_reports_win_and_line() {
    let mut game = new_game();
    for column in [0, 6, 1, 6, 2, 6, 3] {
        game.play_move(column).unwrap();
    }

    let snap = game.snapshot();
    assert_eq!(snap.status, "won");
    assert_eq!(snap.winner.as_deref(), Some("first"));
    assert_eq!(snap.current_player, None);
    assert_eq!(snap.winning_line, vec![[0, 0], [1, 0], [2, 0], [3, 0]]);
    assert_eq!(snap.last_move, Some([3, 0]));
    assert_eq!(snap.code_at(6, 2), CELL_SECOND);
    assert_eq!(snap.code_at(3, 0), CELL_FIRST);
    assert!(!snap.playable());
}

#[test]
fn snapshot_json_shape() {
    let mut game = new_game();
    game.play_move(3).unwrap();

    let json = game.snapshot().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["width"], 7);
    assert_eq!(value["height"], 6);
    assert_eq!(value["status"], "in_progress");
    assert_eq!(value["current_player"], "second");
    assert_eq!(value["winner"], serde_json::Value::Null);
    assert_eq!(value["last_move"], serde_json::json!([3, 0]));
    assert_eq!(value["board"][0][3], 1);
    assert_eq!(value["move_count"], 1);

    let back: GameSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, game.snapshot());
}

#[test]
fn snapshot_into_overwrites_previous_game() {
    let mut big = connect_four::new_game_with_size(9, 8).unwrap();
    big.play_move(8).unwrap();
    let mut snap = big.snapshot();

    let game = new_game();
    game.snapshot_into(&mut snap);
    assert_eq!(snap, game.snapshot());
    assert_eq!(snap.board.len(), 6);
    assert!(snap.board.iter().all(|row| row.len() == 7));
}
