use crate::board_errors::BoardErrors;
use crate::board_state::board_rules::BOARD_SIZE;

/// A `(row, col)` coordinate on the board. Valid when both values are in `0..8`.
pub type Position = (i8, i8);

/// Returns true when both coordinates of `pos` lie on the board.
#[inline]
pub fn is_valid_position(pos: &Position) -> bool {
    (0..BOARD_SIZE).contains(&pos.0) && (0..BOARD_SIZE).contains(&pos.1)
}

/// Converts a position into grid indices, rejecting anything off the board.
#[inline]
pub fn position_to_indices(pos: &Position) -> Result<(usize, usize), BoardErrors> {
    if is_valid_position(pos) {
        Ok((pos.0 as usize, pos.1 as usize))
    } else {
        Err(BoardErrors::OutOfBounds(*pos))
    }
}

/// Moves a position by a row and column offset.
///
/// # Arguments
///
/// * `x` - The current position.
/// * `d_row` - The row offset.
/// * `d_col` - The column offset.
///
/// # Returns
///
/// * `Result<Position, BoardErrors>` - The new position if it is on the board, otherwise an error.
pub fn offset_position(x: &Position, d_row: i8, d_col: i8) -> Result<Position, BoardErrors> {
    let y: Position = (x.0.saturating_add(d_row), x.1.saturating_add(d_col));
    if is_valid_position(&y) {
        Ok(y)
    } else {
        Err(BoardErrors::OutOfBounds(y))
    }
}
