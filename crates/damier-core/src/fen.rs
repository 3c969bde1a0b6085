use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::constants::BOARD_SIZE;
use crate::types::{Cell, Piece, Side};

/// Starting position: black men on the dark cells of rows 0 to 3, gray men
/// on rows 6 to 9, black to move.
pub const STARTING_POSITION: &str = "b1b1b1b1b1/1b1b1b1b1b/b1b1b1b1b1/1b1b1b1b1b/10/10/g1g1g1g1g1/1g1g1g1g1g/g1g1g1g1g1/1g1g1g1g1g b";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FenError {
    #[error("expected 2 space-separated fields, received {0}")]
    FieldCount(usize),
    #[error("expected 10 rows, received {0}")]
    RowCount(usize),
    #[error("row {row} describes {cells} cells, expected 10")]
    RowWidth { row: usize, cells: usize },
    #[error("unknown piece code {0:?}")]
    UnknownPiece(char),
    #[error("unknown side to move {0:?}")]
    UnknownSide(String),
    #[error("piece on light cell ({0},{1})")]
    LightCell(u8, u8),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Board description parsed out of a position string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFen {
    pub board: Board,
    pub turn: Side,
}

/// Parses `<placement> <turn>`. Placement lists rows 0 through 9 separated
/// by `/`, each row a run-length mix of piece codes (`b`/`g` for men,
/// `B`/`G` for kings) and empty-cell counts. Pieces must sit on dark cells.
pub fn parse_fen(fen: &str) -> Result<ParsedFen, FenError> {
    let fields: Vec<&str> = fen.split(' ').collect();
    if fields.len() != 2 {
        return Err(FenError::FieldCount(fields.len()));
    }
    let rows: Vec<&str> = fields[0].split('/').collect();
    if rows.len() != usize::from(BOARD_SIZE) {
        return Err(FenError::RowCount(rows.len()));
    }

    let mut board = Board::empty();
    for (row, row_desc) in rows.iter().enumerate() {
        let mut col = 0usize;
        let mut empties = 0usize;
        for ch in row_desc.chars() {
            if let Some(digit) = ch.to_digit(10) {
                empties = empties * 10 + digit as usize;
                continue;
            }
            col += empties;
            empties = 0;
            let (side, king) = decode_piece(ch)?;
            if col >= usize::from(BOARD_SIZE) {
                return Err(FenError::RowWidth {
                    row,
                    cells: col + 1,
                });
            }
            let cell = Cell::new_unchecked(row as u8, col as u8);
            if !cell.is_dark() {
                return Err(FenError::LightCell(cell.row, cell.col));
            }
            board.place(side, Piece::new(cell, king))?;
            col += 1;
        }
        col += empties;
        if col != usize::from(BOARD_SIZE) {
            return Err(FenError::RowWidth { row, cells: col });
        }
    }

    let turn = match fields[1] {
        "b" => Side::Black,
        "g" => Side::Gray,
        other => return Err(FenError::UnknownSide(other.to_string())),
    };
    Ok(ParsedFen { board, turn })
}

pub fn encode_fen(board: &Board, turn: Side) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        if row > 0 {
            out.push('/');
        }
        let mut empties = 0u32;
        for col in 0..BOARD_SIZE {
            let cell = Cell::new_unchecked(row, col);
            match board.piece_at(cell) {
                Some((id, piece)) => {
                    if empties > 0 {
                        out.push_str(&empties.to_string());
                        empties = 0;
                    }
                    out.push(encode_piece(id.side, piece.king));
                }
                None => empties += 1,
            }
        }
        if empties > 0 {
            out.push_str(&empties.to_string());
        }
    }
    out.push(' ');
    out.push(turn.to_code());
    out
}

fn decode_piece(code: char) -> Result<(Side, bool), FenError> {
    let side =
        Side::from_code(code.to_ascii_lowercase()).ok_or(FenError::UnknownPiece(code))?;
    Ok((side, code.is_ascii_uppercase()))
}

fn encode_piece(side: Side, king: bool) -> char {
    if king {
        side.to_code().to_ascii_uppercase()
    } else {
        side.to_code()
    }
}
