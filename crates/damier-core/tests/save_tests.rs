use std::fs;
use std::path::PathBuf;

use serde_json::json;

use damier_core::constants::DARK_CELLS;
use damier_core::{BoardError, Game, SaveError, SaveState, SavedPiece, Side};

fn temp_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("damier-{}-{name}", std::process::id()));
    path
}

fn empty_save() -> SaveState {
    SaveState {
        black_pieces: Vec::new(),
        gray_pieces: Vec::new(),
        black_turn: true,
        black_caps: 0,
        gray_caps: 0,
        total_time: 0.0,
        black_time: 120.0,
        gray_time: 120.0,
    }
}

#[test]
fn save_then_load_round_trips() {
    let mut game = Game::from_fen("10/10/10/3b6/4g5/10/10/10/10/10 b").unwrap();
    let mv = game.legal_moves().first().cloned().expect("capture move");
    game.apply(&mv);
    game.clock_mut().black_time = 77.25;
    game.clock_mut().total_time = 42.5;

    let path = temp_path("round-trip.json");
    game.save_to(&path).unwrap();
    let loaded = Game::load_from(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded.fen(), game.fen());
    assert_eq!(loaded.turn(), game.turn());
    assert_eq!(loaded.captures_for(Side::Black), 1);
    assert_eq!(loaded.captures_for(Side::Gray), 0);
    assert_eq!(loaded.total_captures(), 1);
    assert_eq!(loaded.clock().black_time, 77.25);
    assert_eq!(loaded.clock().gray_time, 120.0);
    assert_eq!(loaded.clock().total_time, 42.5);
}

#[test]
fn save_layout_matches_the_on_disk_contract() {
    let game = Game::new();
    let value = serde_json::to_value(game.to_save()).unwrap();

    assert_eq!(value["black_pieces"].as_array().unwrap().len(), 20);
    assert_eq!(value["gray_pieces"].as_array().unwrap().len(), 20);
    assert_eq!(value["black_pieces"][0], json!([0, 0, false]));
    assert_eq!(value["gray_pieces"][0], json!([6, 0, false]));
    assert_eq!(value["black_turn"], json!(true));
    assert_eq!(value["black_caps"], json!(0));
    assert_eq!(value["gray_caps"], json!(0));
    assert_eq!(value["total_time"], json!(0.0));
    assert_eq!(value["black_time"], json!(120.0));
    assert_eq!(value["gray_time"], json!(120.0));
}

#[test]
fn king_flags_survive_the_round_trip() {
    let game = Game::from_fen("B9/10/10/10/10/10/10/10/10/9G g").unwrap();
    let state = game.to_save();
    assert_eq!(state.black_pieces, vec![SavedPiece(0, 0, true)]);
    assert_eq!(state.gray_pieces, vec![SavedPiece(9, 9, true)]);
    assert!(!state.black_turn);

    let loaded = Game::from_save(&state).unwrap();
    assert_eq!(loaded.fen(), game.fen());
}

#[test]
fn counters_not_persisted_restart_at_zero() {
    let mut game = Game::new();
    for _ in 0..2 {
        let mv = game.legal_moves().first().cloned().expect("opening move");
        game.apply(&mv);
    }
    assert_eq!(game.moves_count(), 2);

    let loaded = Game::from_save(&game.to_save()).unwrap();
    assert_eq!(loaded.moves_count(), 0);
    assert_eq!(loaded.no_capture_turns(), 0);
    assert_eq!(loaded.fen(), game.fen());
}

#[test]
fn load_missing_file_fails() {
    let err = Game::load_from(temp_path("missing.json")).unwrap_err();
    assert!(matches!(err, SaveError::Io(_)));
}

#[test]
fn load_malformed_json_fails() {
    let path = temp_path("malformed.json");
    fs::write(&path, "{not json").unwrap();
    let err = Game::load_from(&path).unwrap_err();
    fs::remove_file(&path).unwrap();
    assert!(matches!(err, SaveError::Json(_)));
}

#[test]
fn load_rejects_out_of_range_coordinates() {
    let mut state = empty_save();
    state.black_pieces.push(SavedPiece(12, 0, false));
    assert!(matches!(
        Game::from_save(&state).unwrap_err(),
        SaveError::OffBoard(12, 0)
    ));
}

#[test]
fn load_rejects_overlapping_pieces() {
    let mut state = empty_save();
    state.black_pieces.push(SavedPiece(2, 2, false));
    state.gray_pieces.push(SavedPiece(2, 2, true));
    assert!(matches!(
        Game::from_save(&state).unwrap_err(),
        SaveError::Board(BoardError::CellOccupied(_))
    ));
}

#[test]
fn load_rejects_a_twenty_first_piece() {
    let mut state = empty_save();
    state.black_pieces = DARK_CELLS
        .iter()
        .take(21)
        .map(|c| SavedPiece(c.row, c.col, false))
        .collect();
    assert!(matches!(
        Game::from_save(&state).unwrap_err(),
        SaveError::Board(BoardError::SideFull)
    ));
}

#[test]
fn failed_load_leaves_the_caller_session_alone() {
    let game = Game::new();
    let before = game.fen();
    assert!(Game::load_from(temp_path("nope.json")).is_err());
    assert_eq!(game.fen(), before);
}
