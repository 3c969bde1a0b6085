use std::fmt;

use arrayvec::ArrayVec;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Black = 0,
    Gray = 1,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Black => Self::Gray,
            Self::Gray => Self::Black,
        }
    }

    /// Row delta of a forward step for this side's men.
    pub const fn forward(self) -> i8 {
        match self {
            Self::Black => 1,
            Self::Gray => -1,
        }
    }

    pub const fn promotion_row(self) -> u8 {
        match self {
            Self::Black => 9,
            Self::Gray => 0,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn to_code(self) -> char {
        match self {
            Self::Black => 'b',
            Self::Gray => 'g',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'b' => Some(Self::Black),
            'g' => Some(Self::Gray),
            _ => None,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: u8,
    pub col: u8,
}

impl Cell {
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row <= 9 && col <= 9 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    pub const fn new_unchecked(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Playable squares of the checkered pattern: (row + col) even.
    pub const fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub cell: Cell,
    pub king: bool,
}

impl Piece {
    pub const fn new(cell: Cell, king: bool) -> Self {
        Self { cell, king }
    }

    pub const fn man(cell: Cell) -> Self {
        Self { cell, king: false }
    }

    pub const fn crowned(cell: Cell) -> Self {
        Self { cell, king: true }
    }
}

/// Stable arena address of a piece: the slot index never changes while the
/// piece is on the board, so moves stay valid across board snapshots.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceId {
    pub side: Side,
    pub slot: u8,
}

impl PieceId {
    pub const fn new(side: Side, slot: u8) -> Self {
        Self { side, slot }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Simple = 0,
    Capture = 1,
}

pub type CapturePath = ArrayVec<Cell, 20>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub piece: PieceId,
    pub from: Cell,
    pub to: Cell,
    pub kind: MoveKind,
    /// Captured cells in jump order; empty for simple moves.
    pub captures: CapturePath,
    pub kings_captured: u8,
    pub was_king: bool,
}

impl Move {
    pub fn simple(piece: PieceId, from: Cell, to: Cell, was_king: bool) -> Self {
        Self {
            piece,
            from,
            to,
            kind: MoveKind::Simple,
            captures: CapturePath::new(),
            kings_captured: 0,
            was_king,
        }
    }

    pub fn capture(
        piece: PieceId,
        from: Cell,
        to: Cell,
        captures: CapturePath,
        kings_captured: u8,
        was_king: bool,
    ) -> Self {
        Self {
            piece,
            from,
            to,
            kind: MoveKind::Capture,
            captures,
            kings_captured,
            was_king,
        }
    }

    pub fn capture_count(&self) -> u8 {
        self.captures.len() as u8
    }

    pub fn is_capture(&self) -> bool {
        self.kind == MoveKind::Capture
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.from.row, self.from.col)?;
        for cell in &self.captures {
            write!(f, "x({},{})", cell.row, cell.col)?;
        }
        write!(f, "->({},{})", self.to.row, self.to.col)
    }
}

pub type MoveList = ArrayVec<Move, 512>;
