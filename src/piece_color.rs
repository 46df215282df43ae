/// The colour of a piece.
/// `Red` is the first colour and fills the low rows of a new board; `Black`
/// is the second colour and fills the high rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PieceColor {
    /// The first colour (rows 0-2 of the starting layout).
    Red,
    /// The second colour (rows 5-7 of the starting layout).
    Black,
}

impl PieceColor {
    /// Single-character glyph used by renders and compact layouts.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            PieceColor::Red => 'r',
            PieceColor::Black => 'b',
        }
    }

    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            'r' => Some(PieceColor::Red),
            'b' => Some(PieceColor::Black),
            _ => None,
        }
    }
}
