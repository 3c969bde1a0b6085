use damier_core::constants::DARK_CELLS;
use damier_core::fen::parse_fen;
use damier_core::{in_bounds, Board, BoardError, Cell, Piece, Side, STARTING_POSITION};

fn cell(row: u8, col: u8) -> Cell {
    Cell::new(row, col).expect("test cell in bounds")
}

#[test]
fn starting_board_has_twenty_men_per_side() {
    let board = Board::new();
    assert_eq!(board.count(Side::Black), 20);
    assert_eq!(board.count(Side::Gray), 20);
    for side in [Side::Black, Side::Gray] {
        for (_, piece) in board.pieces(side) {
            assert!(piece.cell.is_dark());
            assert!(!piece.king);
        }
    }
}

#[test]
fn starting_board_rows_split_by_side() {
    let board = Board::new();
    for (_, piece) in board.pieces(Side::Black) {
        assert!(piece.cell.row <= 3);
    }
    for (_, piece) in board.pieces(Side::Gray) {
        assert!(piece.cell.row >= 6);
    }
    assert!(!board.is_occupied(cell(4, 4)));
    assert!(!board.is_occupied(cell(5, 5)));
}

#[test]
fn starting_board_matches_starting_fen() {
    let parsed = parse_fen(STARTING_POSITION).expect("starting fen parses");
    assert_eq!(parsed.board, Board::new());
    assert_eq!(parsed.turn, Side::Black);
}

#[test]
fn bounds_cover_the_ten_by_ten_grid() {
    assert!(in_bounds(0, 0));
    assert!(in_bounds(9, 9));
    assert!(!in_bounds(-1, 0));
    assert!(!in_bounds(0, 10));
    assert!(!in_bounds(10, 9));
}

#[test]
fn dark_cell_table_covers_playable_squares() {
    assert_eq!(DARK_CELLS.len(), 50);
    assert!(DARK_CELLS.iter().all(|c| c.is_dark()));
    assert_eq!(DARK_CELLS[0], cell(0, 0));
    assert_eq!(DARK_CELLS[49], cell(9, 9));
}

#[test]
fn place_rejects_occupied_cell() {
    let mut board = Board::empty();
    board.place(Side::Black, Piece::man(cell(2, 2))).unwrap();
    assert_eq!(
        board.place(Side::Gray, Piece::man(cell(2, 2))),
        Err(BoardError::CellOccupied(cell(2, 2)))
    );
}

#[test]
fn place_rejects_twenty_first_piece() {
    let mut board = Board::new();
    assert_eq!(
        board.place(Side::Black, Piece::man(cell(4, 4))),
        Err(BoardError::SideFull)
    );
}

#[test]
fn remove_then_place_reuses_slot() {
    let mut board = Board::empty();
    let id = board.place(Side::Black, Piece::man(cell(2, 2))).unwrap();
    assert_eq!(board.remove(id), Some(Piece::man(cell(2, 2))));
    assert_eq!(board.get(id), None);
    let replacement = board
        .place(Side::Black, Piece::crowned(cell(4, 4)))
        .unwrap();
    assert_eq!(replacement, id);
}

#[test]
fn relocate_and_promote_update_in_place() {
    let mut board = Board::empty();
    let id = board.place(Side::Gray, Piece::man(cell(5, 5))).unwrap();
    board.relocate(id, cell(4, 4));
    board.promote(id);
    assert_eq!(board.get(id), Some(Piece::crowned(cell(4, 4))));
    assert!(board.is_occupied(cell(4, 4)));
    assert!(!board.is_occupied(cell(5, 5)));
}

#[test]
fn piece_at_distinguishes_sides() {
    let board = Board::new();
    let (id, piece) = board.piece_at(cell(0, 0)).expect("black man at origin");
    assert_eq!(id.side, Side::Black);
    assert!(!piece.king);
    assert!(board.side_piece_at(Side::Gray, cell(0, 0)).is_none());
    assert!(board.side_piece_at(Side::Gray, cell(9, 9)).is_some());
}

#[test]
fn board_snapshots_stay_cheap_to_copy() {
    assert!(std::mem::size_of::<Board>() <= 320);
}
