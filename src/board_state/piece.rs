use crate::board_errors::BoardErrors;
use crate::board_location::{is_valid_position, Position};
use crate::board_state::board::{Board, BoardId};
use crate::piece_color::PieceColor;

/// A piece occupying one cell of one board.
///
/// The owning board is recorded as a [`BoardId`] handle rather than a
/// reference, so a piece never keeps a board alive. The position is always on
/// the board: [`Piece::new`] rejects anything else.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    color: PieceColor,
    board: BoardId,
    position: Position,
}

impl Piece {
    /// Builds a piece value. This does not place it anywhere; use
    /// [`Board::place_new_piece`] or [`Board::set`] for that.
    pub fn new(color: PieceColor, board: BoardId, position: Position) -> Result<Self, BoardErrors> {
        if !is_valid_position(&position) {
            return Err(BoardErrors::OutOfBounds(position));
        }
        Ok(Self {
            color,
            board,
            position,
        })
    }

    #[inline]
    pub fn color(&self) -> PieceColor {
        self.color
    }

    #[inline]
    pub fn board(&self) -> BoardId {
        self.board
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Single-character glyph for renders: `'r'` for red, `'b'` for black.
    #[inline]
    pub fn glyph(&self) -> char {
        self.color.glyph()
    }

    /// Places an equivalent piece (same colour and position) on `target` and
    /// returns it. Whatever occupied that cell on `target` is overwritten.
    pub fn copy_onto(&self, target: &mut Board) -> Piece {
        target.place_at(self.position, self.color)
    }

    /// Piece for a position the caller has already checked.
    pub(crate) fn bound_to(color: PieceColor, board: BoardId, position: Position) -> Self {
        debug_assert!(is_valid_position(&position));
        Self {
            color,
            board,
            position,
        }
    }

    /// Same colour, moved onto another board and cell.
    pub(crate) fn rebound(self, board: BoardId, position: Position) -> Self {
        Self::bound_to(self.color, board, position)
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::board_errors::BoardErrors;
    use crate::board_state::board::Board;
    use crate::piece_color::PieceColor;

    #[test]
    fn new_rejects_positions_off_the_board() {
        let board = Board::new_empty();
        assert_eq!(
            Piece::new(PieceColor::Red, board.id(), (0, 8)).unwrap_err(),
            BoardErrors::OutOfBounds((0, 8))
        );
    }

    #[test]
    fn new_does_not_touch_the_board() {
        let board = Board::new_empty();
        let piece = Piece::new(PieceColor::Black, board.id(), (4, 4)).expect("on board");

        assert_eq!(piece.position(), (4, 4));
        assert_eq!(piece.board(), board.id());
        assert!(board.is_empty((4, 4)).expect("on board"));
    }

    #[test]
    fn glyphs_are_distinct_and_never_a_dot() {
        let board = Board::new_empty();
        let red = Piece::new(PieceColor::Red, board.id(), (0, 0)).expect("on board");
        let black = Piece::new(PieceColor::Black, board.id(), (0, 0)).expect("on board");

        assert_eq!(red.glyph(), 'r');
        assert_eq!(black.glyph(), 'b');
        assert_ne!(red.glyph(), '.');
    }

    #[test]
    fn copy_onto_places_matching_piece_on_target() {
        let mut source = Board::new_empty();
        let mut target = Board::new_empty();
        let original = source
            .place_new_piece((2, 6), PieceColor::Black)
            .expect("on board");

        let copied = original.copy_onto(&mut target);

        assert_eq!(copied.color(), original.color());
        assert_eq!(copied.position(), original.position());
        assert_eq!(copied.board(), target.id());
        assert_ne!(copied, original);
        assert_eq!(target.get((2, 6)).expect("on board"), Some(copied));
        assert_eq!(source.get((2, 6)).expect("on board"), Some(original));
    }
}
