use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::board::{Board, BoardError};
use crate::fen::ParsedFen;
use crate::game::{Clock, Game};
use crate::position::Position;
use crate::types::{Cell, Piece, Side};

/// One piece as persisted: `[row, col, is_king]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPiece(pub u8, pub u8, pub bool);

/// Serialized game state. Field names and shapes are the on-disk contract;
/// renaming one breaks every existing save file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    pub black_pieces: Vec<SavedPiece>,
    pub gray_pieces: Vec<SavedPiece>,
    pub black_turn: bool,
    pub black_caps: u32,
    pub gray_caps: u32,
    pub total_time: f64,
    pub black_time: f64,
    pub gray_time: f64,
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save file io: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed save data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("piece coordinates ({0},{1}) are off the board")]
    OffBoard(u8, u8),
    #[error(transparent)]
    Board(#[from] BoardError),
}

impl SaveState {
    pub fn from_game(game: &Game) -> Self {
        let position = game.position();
        let clock = game.clock();
        Self {
            black_pieces: collect_pieces(&position.board, Side::Black),
            gray_pieces: collect_pieces(&position.board, Side::Gray),
            black_turn: position.turn == Side::Black,
            black_caps: position.captures[Side::Black.index()],
            gray_caps: position.captures[Side::Gray.index()],
            total_time: clock.total_time,
            black_time: clock.black_time,
            gray_time: clock.gray_time,
        }
    }
}

impl Game {
    pub fn to_save(&self) -> SaveState {
        SaveState::from_game(self)
    }

    /// Rebuilds a session from persisted state, validating coordinates and
    /// cell occupancy. The format does not carry move counters or
    /// repetition history, so those restart from the loaded position.
    pub fn from_save(state: &SaveState) -> Result<Self, SaveError> {
        let mut board = Board::empty();
        load_side(&mut board, Side::Black, &state.black_pieces)?;
        load_side(&mut board, Side::Gray, &state.gray_pieces)?;
        let turn = if state.black_turn {
            Side::Black
        } else {
            Side::Gray
        };
        let mut position = Position::from_parsed(ParsedFen { board, turn });
        position.captures = [state.black_caps, state.gray_caps];
        position.total_captures = state.black_caps + state.gray_caps;
        let clock = Clock {
            total_time: state.total_time,
            black_time: state.black_time,
            gray_time: state.gray_time,
        };
        Ok(Game::from_parts(position, clock))
    }

    /// Writes the session to `path` as pretty-printed JSON.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), SaveError> {
        let text = serde_json::to_string_pretty(&self.to_save())?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Reads a session back from `path`. Nothing is constructed on failure,
    /// so the caller keeps whatever session it already had.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, SaveError> {
        let text = fs::read_to_string(path)?;
        let state: SaveState = serde_json::from_str(&text)?;
        Self::from_save(&state)
    }
}

fn collect_pieces(board: &Board, side: Side) -> Vec<SavedPiece> {
    board
        .pieces(side)
        .map(|(_, piece)| SavedPiece(piece.cell.row, piece.cell.col, piece.king))
        .collect()
}

fn load_side(board: &mut Board, side: Side, pieces: &[SavedPiece]) -> Result<(), SaveError> {
    for &SavedPiece(row, col, king) in pieces {
        let cell = Cell::new(row, col).ok_or(SaveError::OffBoard(row, col))?;
        board.place(side, Piece::new(cell, king))?;
    }
    Ok(())
}
