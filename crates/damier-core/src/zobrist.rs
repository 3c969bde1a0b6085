use std::sync::LazyLock;

use crate::board::Board;
use crate::types::{Piece, Side};

const CELLS: usize = 100;
const PIECE_KEYS: usize = 2 * 2 * CELLS;

static ZOBRIST: LazyLock<ZobristKeys> = LazyLock::new(ZobristKeys::new);

pub fn zobrist() -> &'static ZobristKeys {
    &ZOBRIST
}

/// Random keys hashing a position to a u64: one key per (side, kingness,
/// cell) triple plus one for the side to move. Placement hashes are
/// order-independent, which makes the hash a canonical repetition key.
#[derive(Debug)]
pub struct ZobristKeys {
    piece_cell: [u64; PIECE_KEYS],
    side_to_move: u64,
}

impl ZobristKeys {
    fn new() -> Self {
        let mut state: u64 = 0x00C0_FFEE_D15E_A5E5;
        let mut piece_cell = [0u64; PIECE_KEYS];
        for key in &mut piece_cell {
            *key = next_u64(&mut state);
        }
        let side_to_move = next_u64(&mut state);
        Self {
            piece_cell,
            side_to_move,
        }
    }

    pub fn piece_key(&self, side: Side, piece: Piece) -> u64 {
        let kind = (side.index() * 2) + piece.king as usize;
        let cell = usize::from(piece.cell.row) * 10 + usize::from(piece.cell.col);
        self.piece_cell[kind * CELLS + cell]
    }

    pub fn toggle_piece(&self, hash: &mut u64, side: Side, piece: Piece) {
        *hash ^= self.piece_key(side, piece);
    }

    pub fn toggle_side_to_move(&self, hash: &mut u64) {
        *hash ^= self.side_to_move;
    }

    pub fn hash_position(&self, board: &Board, turn: Side) -> u64 {
        let mut hash = 0u64;
        for side in [Side::Black, Side::Gray] {
            for (_, piece) in board.pieces(side) {
                hash ^= self.piece_key(side, piece);
            }
        }
        if matches!(turn, Side::Gray) {
            hash ^= self.side_to_move;
        }
        hash
    }
}

fn next_u64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    #[test]
    fn keys_are_deterministic() {
        let piece = Piece::man(Cell::new_unchecked(3, 3));
        assert_eq!(
            zobrist().piece_key(Side::Black, piece),
            zobrist().piece_key(Side::Black, piece)
        );
    }

    #[test]
    fn keys_distinguish_side_kingness_and_cell() {
        let man = Piece::man(Cell::new_unchecked(3, 3));
        let king = Piece::crowned(Cell::new_unchecked(3, 3));
        let shifted = Piece::man(Cell::new_unchecked(5, 5));
        let black = zobrist().piece_key(Side::Black, man);
        assert_ne!(black, zobrist().piece_key(Side::Gray, man));
        assert_ne!(black, zobrist().piece_key(Side::Black, king));
        assert_ne!(black, zobrist().piece_key(Side::Black, shifted));
    }

    #[test]
    fn toggle_round_trips() {
        let board = Board::new();
        let mut hash = zobrist().hash_position(&board, Side::Black);
        let original = hash;
        let piece = Piece::man(Cell::new_unchecked(4, 4));
        zobrist().toggle_piece(&mut hash, Side::Black, piece);
        zobrist().toggle_piece(&mut hash, Side::Black, piece);
        assert_eq!(hash, original);
        zobrist().toggle_side_to_move(&mut hash);
        assert_eq!(hash, zobrist().hash_position(&board, Side::Gray));
    }
}
