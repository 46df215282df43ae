//! Compact-layout-to-Board parser.
//!
//! Accepts the notation written by `generate_layout`: eight `/`-separated
//! rows, row 0 first, each summing to eight cells of piece glyphs and
//! empty-run digits.

use crate::board_errors::BoardErrors;
use crate::board_state::board::Board;
use crate::board_state::board_rules::BOARD_SIZE;
use crate::piece_color::PieceColor;

pub fn parse_layout(layout: &str) -> Result<Board, BoardErrors> {
    let rows: Vec<&str> = layout.trim().split('/').collect();
    if rows.len() != BOARD_SIZE as usize {
        return Err(BoardErrors::InvalidLayoutForm(format!(
            "expected 8 rows, found {} in '{layout}'",
            rows.len()
        )));
    }

    let mut board = Board::new_empty();

    for (row_idx, row_str) in rows.iter().enumerate() {
        parse_row(row_idx as i8, row_str, &mut board)?;
    }

    Ok(board)
}

fn parse_row(row: i8, row_str: &str, board: &mut Board) -> Result<(), BoardErrors> {
    let mut col: i8 = 0;

    for ch in row_str.chars() {
        if let Some(empty_count) = ch.to_digit(10) {
            if !(1..=8).contains(&empty_count) {
                return Err(BoardErrors::InvalidLayoutChar(ch));
            }
            col += empty_count as i8;
            if col > BOARD_SIZE {
                return Err(too_wide(row_str));
            }
            continue;
        }

        let color = PieceColor::from_glyph(ch).ok_or(BoardErrors::InvalidLayoutChar(ch))?;

        if col >= BOARD_SIZE {
            return Err(too_wide(row_str));
        }

        board.place_new_piece((row, col), color)?;
        col += 1;
    }

    if col != BOARD_SIZE {
        return Err(BoardErrors::InvalidLayoutForm(format!(
            "row '{row_str}' covers {col} cells instead of 8"
        )));
    }

    Ok(())
}

fn too_wide(row_str: &str) -> BoardErrors {
    BoardErrors::InvalidLayoutForm(format!("row '{row_str}' has more than 8 cells"))
}
