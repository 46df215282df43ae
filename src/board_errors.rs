//! Errors used throughout the board model.
//!
//! `BoardErrors` is the single error type returned by board access, piece
//! construction and the text-format utilities. Each variant carries the
//! offending input so callers can report exactly what was rejected.
//!
//! Nothing in the crate retries on error; failures propagate to the caller.

use std::fmt;

use crate::board_location::Position;

/// Unified error type for the board model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardErrors {
    /// A position with a coordinate outside `0..8` was used to read, write or
    /// build a piece.
    ///
    /// Payload: the rejected `(row, col)` position.
    OutOfBounds(Position),

    /// An algebraic coordinate (for example `"c3"`) failed to parse.
    ///
    /// Payload: the original string.
    InvalidAlgebraicString(String),

    /// An unexpected character was found while parsing a compact layout.
    InvalidLayoutChar(char),

    /// A compact layout had the wrong shape (row count or row width).
    ///
    /// Payload: a description including the offending fragment.
    InvalidLayoutForm(String),
}

impl fmt::Display for BoardErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardErrors::OutOfBounds((row, col)) => {
                write!(f, "position ({row}, {col}) is outside the 8x8 board")
            }
            BoardErrors::InvalidAlgebraicString(s) => {
                write!(f, "invalid algebraic square: {s}")
            }
            BoardErrors::InvalidLayoutChar(ch) => {
                write!(f, "invalid character '{ch}' in board layout")
            }
            BoardErrors::InvalidLayoutForm(s) => write!(f, "malformed board layout: {s}"),
        }
    }
}

impl std::error::Error for BoardErrors {}

#[cfg(test)]
mod tests {
    use super::BoardErrors;

    #[test]
    fn display_names_the_rejected_input() {
        assert_eq!(
            BoardErrors::OutOfBounds((8, -1)).to_string(),
            "position (8, -1) is outside the 8x8 board"
        );
        assert_eq!(
            BoardErrors::InvalidLayoutChar('x').to_string(),
            "invalid character 'x' in board layout"
        );
    }
}
