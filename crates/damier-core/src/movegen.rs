use arrayvec::ArrayVec;

use crate::board::{in_bounds, Board};
use crate::types::{CapturePath, Cell, Move, MoveList, PieceId, Side};

/// Diagonal step deltas as (row, col).
pub const DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// One fully explored capture chain for a single piece.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureChain {
    pub landing: Cell,
    pub captured: CapturePath,
    pub kings_captured: u8,
}

pub type ChainList = ArrayVec<CaptureChain, 64>;

#[derive(Debug, Clone, Copy)]
struct Jump {
    target: PieceId,
    over: Cell,
    over_king: bool,
    landing: Cell,
}

/// Every legal move for `turn`. Captures are mandatory: if any piece can
/// capture, only captures are returned, filtered down to the moves that
/// take the most pieces, with most kings captured breaking ties.
pub fn legal_moves(board: &Board, turn: Side) -> MoveList {
    let mut moves = MoveList::new();
    for (id, piece) in board.pieces(turn) {
        for chain in capture_sequences(*board, id, &CapturePath::new()) {
            let mv = Move::capture(
                id,
                piece.cell,
                chain.landing,
                chain.captured,
                chain.kings_captured,
                piece.king,
            );
            let _ = moves.try_push(mv);
        }
    }
    if moves.is_empty() {
        return simple_moves(board, turn);
    }
    let most = moves.iter().map(Move::capture_count).max().unwrap_or(0);
    moves.retain(|mv| mv.capture_count() == most);
    let most_kings = moves.iter().map(|mv| mv.kings_captured).max().unwrap_or(0);
    moves.retain(|mv| mv.kings_captured == most_kings);
    moves
}

/// Maximal capture continuations for the piece at `id`.
///
/// The board is a by-value snapshot: each branch removes its captured piece
/// and relocates the jumper before recursing, so sibling branches never see
/// each other's changes. `excluded` lists cells already captured earlier in
/// the chain; a piece is jumped at most once. Chains that can continue do
/// continue, so every returned chain is maximal along its own branch.
///
/// A man passing through its promotion row mid-chain keeps jumping as a
/// man; promotion only happens when the finished move is applied.
pub fn capture_sequences(board: Board, id: PieceId, excluded: &CapturePath) -> ChainList {
    let mut chains = ChainList::new();
    for jump in immediate_jumps(&board, id, excluded) {
        let mut next_board = board;
        next_board.remove(jump.target);
        next_board.relocate(id, jump.landing);
        let mut next_excluded = excluded.clone();
        next_excluded.push(jump.over);

        let continuations = capture_sequences(next_board, id, &next_excluded);
        if continuations.is_empty() {
            let mut captured = CapturePath::new();
            captured.push(jump.over);
            let _ = chains.try_push(CaptureChain {
                landing: jump.landing,
                captured,
                kings_captured: jump.over_king as u8,
            });
        } else {
            for tail in continuations {
                let mut captured = CapturePath::new();
                captured.push(jump.over);
                captured.extend(tail.captured.iter().copied());
                let _ = chains.try_push(CaptureChain {
                    landing: tail.landing,
                    captured,
                    kings_captured: jump.over_king as u8 + tail.kings_captured,
                });
            }
        }
    }
    chains
}

fn immediate_jumps(board: &Board, id: PieceId, excluded: &CapturePath) -> ArrayVec<Jump, 4> {
    let mut jumps = ArrayVec::new();
    let Some(piece) = board.get(id) else {
        return jumps;
    };
    let enemy = id.side.opponent();
    for dir in DIRS {
        let jump = if piece.king {
            king_jump(board, piece.cell, enemy, dir, excluded)
        } else {
            man_jump(board, piece.cell, enemy, dir, excluded)
        };
        if let Some(jump) = jump {
            jumps.push(jump);
        }
    }
    jumps
}

/// Men jump adjacent enemies in all four diagonal directions.
fn man_jump(
    board: &Board,
    from: Cell,
    enemy: Side,
    (dr, dc): (i8, i8),
    excluded: &CapturePath,
) -> Option<Jump> {
    let land_row = from.row as i8 + 2 * dr;
    let land_col = from.col as i8 + 2 * dc;
    if !in_bounds(land_row, land_col) {
        return None;
    }
    let over = Cell::new_unchecked((from.row as i8 + dr) as u8, (from.col as i8 + dc) as u8);
    let landing = Cell::new_unchecked(land_row as u8, land_col as u8);
    if excluded.contains(&over) || board.is_occupied(landing) {
        return None;
    }
    let (target, target_piece) = board.side_piece_at(enemy, over)?;
    Some(Jump {
        target,
        over,
        over_king: target_piece.king,
        landing,
    })
}

/// Kings scan outward until the first occupied cell. Only an enemy piece
/// with an empty cell immediately beyond it can be jumped; the king lands
/// on that cell.
fn king_jump(
    board: &Board,
    from: Cell,
    enemy: Side,
    (dr, dc): (i8, i8),
    excluded: &CapturePath,
) -> Option<Jump> {
    let mut row = from.row as i8 + dr;
    let mut col = from.col as i8 + dc;
    while in_bounds(row, col) {
        let scan = Cell::new_unchecked(row as u8, col as u8);
        if let Some((target, target_piece)) = board.piece_at(scan) {
            if target.side != enemy || excluded.contains(&scan) {
                return None;
            }
            let land_row = row + dr;
            let land_col = col + dc;
            if !in_bounds(land_row, land_col) {
                return None;
            }
            let landing = Cell::new_unchecked(land_row as u8, land_col as u8);
            if board.is_occupied(landing) {
                return None;
            }
            return Some(Jump {
                target,
                over: scan,
                over_king: target_piece.king,
                landing,
            });
        }
        row += dr;
        col += dc;
    }
    None
}

fn simple_moves(board: &Board, turn: Side) -> MoveList {
    let mut moves = MoveList::new();
    for (id, piece) in board.pieces(turn) {
        if piece.king {
            for (dr, dc) in DIRS {
                let mut row = piece.cell.row as i8 + dr;
                let mut col = piece.cell.col as i8 + dc;
                while in_bounds(row, col) {
                    let to = Cell::new_unchecked(row as u8, col as u8);
                    if board.is_occupied(to) {
                        break;
                    }
                    let _ = moves.try_push(Move::simple(id, piece.cell, to, true));
                    row += dr;
                    col += dc;
                }
            }
        } else {
            let row = piece.cell.row as i8 + id.side.forward();
            for dc in [-1i8, 1] {
                let col = piece.cell.col as i8 + dc;
                if !in_bounds(row, col) {
                    continue;
                }
                let to = Cell::new_unchecked(row as u8, col as u8);
                if !board.is_occupied(to) {
                    let _ = moves.try_push(Move::simple(id, piece.cell, to, false));
                }
            }
        }
    }
    moves
}

/// Rewrites multi-jump captures as their first jump only, so a caller can
/// play a chain one hop at a time and re-query legal moves after each hop.
/// Simple moves and single captures pass through unchanged; steps that
/// several chains share are emitted once.
///
/// The truncated destination is the cell immediately beyond the first
/// captured piece along the jump direction, where both men and kings land.
pub fn split_into_single_steps(board: &Board, moves: &[Move]) -> MoveList {
    let mut out = MoveList::new();
    for mv in moves {
        if mv.capture_count() <= 1 {
            if !out.contains(mv) {
                let _ = out.try_push(mv.clone());
            }
            continue;
        }
        let first = mv.captures[0];
        let dr = (first.row as i8 - mv.from.row as i8).signum();
        let dc = (first.col as i8 - mv.from.col as i8).signum();
        let landing =
            Cell::new_unchecked((first.row as i8 + dr) as u8, (first.col as i8 + dc) as u8);
        let mut step = mv.clone();
        step.to = landing;
        step.captures.clear();
        step.captures.push(first);
        step.kings_captured = board
            .piece_at(first)
            .map(|(_, piece)| piece.king as u8)
            .unwrap_or(0);
        if !out.contains(&step) {
            let _ = out.try_push(step);
        }
    }
    out
}
