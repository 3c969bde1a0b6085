use crate::types::Cell;

pub const BOARD_SIZE: u8 = 10;
pub const PIECES_PER_SIDE: usize = 20;

/// Rows filled with men per side at game start.
pub const SETUP_ROWS: u8 = 4;

/// Consecutive captureless, promotionless turns before the game is drawn.
pub const NO_CAPTURE_DRAW_LIMIT: u32 = 50;

/// Occurrences of the same position (same placement, same side to move)
/// before the game is drawn.
pub const REPETITION_DRAW_COUNT: u8 = 3;

/// Blitz allotment per player, in seconds.
pub const DEFAULT_TIME_LIMIT: f64 = 120.0;

/// The 50 playable cells in row-major order.
pub const DARK_CELLS: [Cell; 50] = build_dark_cells();

const fn build_dark_cells() -> [Cell; 50] {
    let mut cells = [Cell::new_unchecked(0, 0); 50];
    let mut idx = 0;
    let mut row = 0u8;
    while row < BOARD_SIZE {
        let mut col = 0u8;
        while col < BOARD_SIZE {
            if (row + col) % 2 == 0 {
                cells[idx] = Cell::new_unchecked(row, col);
                idx += 1;
            }
            col += 1;
        }
        row += 1;
    }
    cells
}
