use thiserror::Error;

use crate::constants::{BOARD_SIZE, PIECES_PER_SIDE, SETUP_ROWS};
use crate::types::{Cell, Piece, PieceId, Side};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell ({},{}) is already occupied", .0.row, .0.col)]
    CellOccupied(Cell),
    #[error("side already has {PIECES_PER_SIDE} pieces")]
    SideFull,
}

pub const fn in_bounds(row: i8, col: i8) -> bool {
    row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8
}

/// Piece arena for both sides. `Copy` on purpose: capture search recurses
/// over by-value snapshots, so sibling branches never see each other's
/// removals.
///
/// Occupancy queries scan the 40 slots linearly; at this piece count that
/// beats keeping a parallel grid in sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    slots: [[Option<Piece>; PIECES_PER_SIDE]; 2],
}

impl Board {
    /// Standard starting layout: each side's men fill the dark cells of its
    /// four nearest rows, with two empty rows in between.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for row in 0..SETUP_ROWS {
            for col in 0..BOARD_SIZE {
                let cell = Cell::new_unchecked(row, col);
                if cell.is_dark() {
                    let _ = board.place(Side::Black, Piece::man(cell));
                }
            }
        }
        for row in (BOARD_SIZE - SETUP_ROWS)..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                let cell = Cell::new_unchecked(row, col);
                if cell.is_dark() {
                    let _ = board.place(Side::Gray, Piece::man(cell));
                }
            }
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            slots: [[None; PIECES_PER_SIDE]; 2],
        }
    }

    /// Places a piece in the side's first free slot and returns its id.
    pub fn place(&mut self, side: Side, piece: Piece) -> Result<PieceId, BoardError> {
        if self.is_occupied(piece.cell) {
            return Err(BoardError::CellOccupied(piece.cell));
        }
        let arena = &mut self.slots[side.index()];
        for (slot, entry) in arena.iter_mut().enumerate() {
            if entry.is_none() {
                *entry = Some(piece);
                return Ok(PieceId::new(side, slot as u8));
            }
        }
        Err(BoardError::SideFull)
    }

    pub fn get(&self, id: PieceId) -> Option<Piece> {
        self.slots[id.side.index()][id.slot as usize]
    }

    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        self.slots[id.side.index()][id.slot as usize].take()
    }

    pub fn relocate(&mut self, id: PieceId, to: Cell) {
        if let Some(piece) = &mut self.slots[id.side.index()][id.slot as usize] {
            piece.cell = to;
        }
    }

    pub fn promote(&mut self, id: PieceId) {
        if let Some(piece) = &mut self.slots[id.side.index()][id.slot as usize] {
            piece.king = true;
        }
    }

    pub fn piece_at(&self, cell: Cell) -> Option<(PieceId, Piece)> {
        self.side_piece_at(Side::Black, cell)
            .or_else(|| self.side_piece_at(Side::Gray, cell))
    }

    pub fn side_piece_at(&self, side: Side, cell: Cell) -> Option<(PieceId, Piece)> {
        self.pieces(side).find(|(_, piece)| piece.cell == cell)
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.piece_at(cell).is_some()
    }

    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (PieceId, Piece)> + '_ {
        self.slots[side.index()]
            .iter()
            .enumerate()
            .filter_map(move |(slot, entry)| {
                entry.map(|piece| (PieceId::new(side, slot as u8), piece))
            })
    }

    pub fn count(&self, side: Side) -> usize {
        self.slots[side.index()]
            .iter()
            .filter(|entry| entry.is_some())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
