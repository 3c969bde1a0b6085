use std::collections::HashMap;

use crate::board::Board;
use crate::constants::REPETITION_DRAW_COUNT;
use crate::fen::{encode_fen, parse_fen, FenError, ParsedFen, STARTING_POSITION};
use crate::movegen::legal_moves;
use crate::types::{Move, MoveKind, MoveList, Side};
use crate::zobrist::zobrist;

/// Full mutable game state minus the clock: board, side to move, counters,
/// and the repetition history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub board: Board,
    pub turn: Side,
    /// Moves applied since the start of the game.
    pub moves_count: u32,
    /// Pieces removed from the board since the start of the game.
    pub total_captures: u32,
    /// Per-side capture tallies, indexed by `Side`.
    pub captures: [u32; 2],
    /// Consecutive turns without a capture or promotion.
    pub no_capture_turns: u32,
    pub zobrist_hash: u64,
    repetition_table: HashMap<u64, u8>,
}

impl Position {
    pub fn new() -> Self {
        Self::from_fen(STARTING_POSITION).expect("starting position must parse")
    }

    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed = parse_fen(fen)?;
        Ok(Self::from_parsed(parsed))
    }

    pub(crate) fn from_parsed(parsed: ParsedFen) -> Self {
        let zobrist_hash = zobrist().hash_position(&parsed.board, parsed.turn);
        let mut repetition_table = HashMap::new();
        repetition_table.insert(zobrist_hash, 1);
        Self {
            board: parsed.board,
            turn: parsed.turn,
            moves_count: 0,
            total_captures: 0,
            captures: [0, 0],
            no_capture_turns: 0,
            zobrist_hash,
            repetition_table,
        }
    }

    pub fn fen(&self) -> String {
        encode_fen(&self.board, self.turn)
    }

    pub fn moves(&self) -> MoveList {
        legal_moves(&self.board, self.turn)
    }

    /// Applies a move produced by [`Self::moves`] and returns the updated
    /// per-side capture tallies. Captured pieces are removed, the mover is
    /// relocated and promoted if it finishes on its promotion row, and the
    /// counters and hash are updated.
    ///
    /// The turn does not pass here: a caller driving a capture chain one
    /// hop at a time applies several moves for the same side before calling
    /// [`Self::end_turn`]. The move must be legal for the current position.
    pub fn apply_move(&mut self, mv: &Move) -> [u32; 2] {
        let keys = zobrist();
        let side = mv.piece.side;
        self.moves_count += 1;

        match mv.kind {
            MoveKind::Capture => {
                let enemy = side.opponent();
                let mut removed = 0u32;
                for &cell in &mv.captures {
                    if let Some((target, piece)) = self.board.side_piece_at(enemy, cell) {
                        self.board.remove(target);
                        keys.toggle_piece(&mut self.zobrist_hash, enemy, piece);
                        removed += 1;
                    }
                }
                self.total_captures += removed;
                self.captures[side.index()] += removed;
                self.no_capture_turns = 0;
            }
            MoveKind::Simple => {
                self.no_capture_turns += 1;
            }
        }

        let piece = self
            .board
            .get(mv.piece)
            .expect("applied move must reference a live piece");
        keys.toggle_piece(&mut self.zobrist_hash, side, piece);
        self.board.relocate(mv.piece, mv.to);
        if !piece.king && mv.to.row == side.promotion_row() {
            self.board.promote(mv.piece);
            self.no_capture_turns = 0;
        }
        let moved = self
            .board
            .get(mv.piece)
            .expect("moved piece must stay on the board");
        keys.toggle_piece(&mut self.zobrist_hash, side, moved);

        self.captures
    }

    /// Passes the turn to the opponent and records the resulting position
    /// for repetition detection.
    pub fn end_turn(&mut self) {
        self.turn = self.turn.opponent();
        zobrist().toggle_side_to_move(&mut self.zobrist_hash);
        self.record_position();
    }

    /// Counts the current position towards repetition detection.
    /// [`Self::end_turn`] already records once per completed turn; call
    /// this directly only when mutating the board through other means.
    pub fn record_position(&mut self) {
        *self.repetition_table.entry(self.zobrist_hash).or_insert(0) += 1;
    }

    pub(crate) fn repetition_count(&self, hash: u64) -> u8 {
        self.repetition_table.get(&hash).copied().unwrap_or(0)
    }

    /// True once the current position has occurred three times with the
    /// same side to move.
    pub fn is_repeated(&self) -> bool {
        self.repetition_count(self.zobrist_hash) >= REPETITION_DRAW_COUNT
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
