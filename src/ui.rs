//! Text rendering of a board, one glyph per cell.

use alloc::string::String;
use core::fmt;

use crate::board::Board;

pub const WATER: char = '~';
pub const ALIVE_DECK: char = '\u{25A1}';
pub const DEAD_DECK: char = '*';
pub const SUNK_DECK: char = 'x';

/// Glyphs within a row are separated by this.
pub const CELL_SEPARATOR: &str = "   ";

/// Render every cell of `board`, rows terminated by `\n`.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::with_capacity(size * size * 4);
    for row in 0..size {
        for col in 0..size {
            out.push(board.cell_glyph(row, col).unwrap_or(WATER));
            out.push_str(if col + 1 == size { "\n" } else { CELL_SEPARATOR });
        }
    }
    out
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_board(self))
    }
}

/// Print the board to stdout.
#[cfg(feature = "std")]
pub fn print_board(board: &Board) {
    std::print!("{}", render_board(board));
}
