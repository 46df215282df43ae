//! Terminal-oriented board renderer with coordinates.
//!
//! Frames [`Board::render`]'s cells with file letters and rank numbers for
//! debugging and the `board_dump` binary. Row 0 (rank 1) is drawn on top, the
//! same orientation as `Board::render`.

use crate::board_state::board::{Board, EMPTY_GLYPH};
use crate::board_state::board_rules::BOARD_SIZE;

const FILES_LINE: &str = "  a b c d e f g h";

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    out.push_str(FILES_LINE);
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let rank = char::from(b'1' + row as u8);
        out.push(rank);
        out.push(' ');

        for col in 0..BOARD_SIZE {
            let glyph = board
                .get((row, col))
                .ok()
                .flatten()
                .map_or(EMPTY_GLYPH, |piece| piece.glyph());
            out.push(glyph);
            out.push(' ');
        }

        out.push(rank);
        out.push('\n');
    }

    out.push_str(FILES_LINE);

    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::board_state::board::Board;

    #[test]
    fn frames_each_row_with_its_rank() {
        let rendered = render_board(&Board::new_filled());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "  a b c d e f g h");
        assert_eq!(lines[1], "1 r . r . r . r . 1");
        assert_eq!(lines[6], "6 . b . b . b . b 6");
        assert_eq!(lines[9], "  a b c d e f g h");
    }
}
