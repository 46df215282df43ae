//! Board-shape constants.
//!
//! Stores the fixed board dimension, the row bands filled by each colour in
//! the starting layout, and that layout in compact notation.

use std::ops::Range;

use crate::board_location::Position;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// Rows filled with the first colour (`Red`) on a new board.
pub const FIRST_COLOR_ROWS: Range<i8> = 0..3;

/// Rows filled with the second colour (`Black`) on a new board.
pub const SECOND_COLOR_ROWS: Range<i8> = 5..8;

/// The filled starting board in compact layout notation, row 0 first.
pub const STARTING_LAYOUT: &str =
    "r1r1r1r1/1r1r1r1r/r1r1r1r1/8/8/1b1b1b1b/b1b1b1b1/1b1b1b1b";

/// Squares where `(row + col)` is even. Only these are filled at the start.
#[inline]
pub fn is_playable_square(pos: &Position) -> bool {
    (pos.0 as i16 + pos.1 as i16).rem_euclid(2) == 0
}
