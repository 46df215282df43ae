//! Board-to-compact-layout generator.
//!
//! Rows are written row 0 first and separated by `/`. Pieces use their glyph
//! and runs of empty cells collapse to a digit, so the filled board is
//! `r1r1r1r1/1r1r1r1r/r1r1r1r1/8/8/1b1b1b1b/b1b1b1b1/1b1b1b1b`.

use crate::board_state::board::Board;
use crate::board_state::board_rules::BOARD_SIZE;

pub fn generate_layout(board: &Board) -> String {
    let mut out = String::new();

    for row in 0..BOARD_SIZE {
        let mut empty_count = 0u8;

        for col in 0..BOARD_SIZE {
            match board.get((row, col)).ok().flatten() {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.glyph());
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if row < BOARD_SIZE - 1 {
            out.push('/');
        }
    }

    out
}
