pub mod board;
pub mod constants;
pub mod fen;
pub mod game;
pub mod movegen;
pub mod position;
pub mod save;
pub mod types;
pub mod zobrist;

pub use board::{in_bounds, Board, BoardError};
pub use fen::{encode_fen, parse_fen, FenError, ParsedFen, STARTING_POSITION};
pub use game::{BlockedPolicy, Clock, Game, GameStatus};
pub use movegen::{
    capture_sequences, legal_moves, split_into_single_steps, CaptureChain, ChainList, DIRS,
};
pub use position::Position;
pub use save::{SaveError, SaveState, SavedPiece};
pub use types::{CapturePath, Cell, Move, MoveKind, MoveList, Piece, PieceId, Side};
