//! Position conversions for algebraic coordinates.
//!
//! Columns map to files `a..h` and rows map to ranks `1..8`, so `(0, 0)` is
//! `a1` and `(7, 7)` is `h8`.

use crate::board_errors::BoardErrors;
use crate::board_location::{is_valid_position, Position};

/// Convert algebraic notation (for example: "c3") to a position.
#[inline]
pub fn algebraic_to_position(square: &str) -> Result<Position, BoardErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(BoardErrors::InvalidAlgebraicString(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(BoardErrors::InvalidAlgebraicString(square.to_owned()));
    }

    Ok(((rank - b'1') as i8, (file - b'a') as i8))
}

/// Convert a position to algebraic notation (for example: "c3").
#[inline]
pub fn position_to_algebraic(pos: Position) -> Result<String, BoardErrors> {
    if !is_valid_position(&pos) {
        return Err(BoardErrors::OutOfBounds(pos));
    }

    let file_char = char::from(b'a' + pos.1 as u8);
    let rank_char = char::from(b'1' + pos.0 as u8);

    Ok(format!("{file_char}{rank_char}"))
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_position, position_to_algebraic};
    use crate::board_errors::BoardErrors;

    #[test]
    fn corner_conversions() {
        assert_eq!(algebraic_to_position("a1").expect("a1 should parse"), (0, 0));
        assert_eq!(algebraic_to_position("h8").expect("h8 should parse"), (7, 7));
        assert_eq!(position_to_algebraic((0, 0)).expect("(0,0) should convert"), "a1");
        assert_eq!(position_to_algebraic((7, 7)).expect("(7,7) should convert"), "h8");
    }

    #[test]
    fn file_is_column_and_rank_is_row() {
        assert_eq!(algebraic_to_position("c5").expect("c5 should parse"), (4, 2));
        assert_eq!(position_to_algebraic((4, 2)).expect("should convert"), "c5");
    }

    #[test]
    fn rejects_bad_input() {
        for bad in ["", "a", "a9", "i1", "A1", "a10"] {
            assert_eq!(
                algebraic_to_position(bad).unwrap_err(),
                BoardErrors::InvalidAlgebraicString(bad.to_owned())
            );
        }
        assert_eq!(
            position_to_algebraic((8, 0)).unwrap_err(),
            BoardErrors::OutOfBounds((8, 0))
        );
    }
}
