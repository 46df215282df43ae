//! The 8x8 board.
//!
//! `Board` stores an optional [`Piece`] per cell and is the single source of
//! truth for where a piece is: every stored piece reports the cell it sits in
//! and the id of the board holding it. Reads and writes are bounds checked and
//! return [`BoardErrors::OutOfBounds`] for positions off the board.
//!
//! Boards are plain data with no interior mutability. A board and the result
//! of [`Board::copy`] share nothing, which is what look-ahead or undo code
//! relies on when it mutates one snapshot while keeping another.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::board_errors::BoardErrors;
use crate::board_location::{self, position_to_indices, Position};
use crate::board_state::board_rules::{
    is_playable_square, BOARD_SIZE, FIRST_COLOR_ROWS, SECOND_COLOR_ROWS,
};
use crate::board_state::piece::Piece;
use crate::piece_color::PieceColor;

const SIZE: usize = BOARD_SIZE as usize;

/// Glyph rendered for an empty cell.
pub const EMPTY_GLYPH: char = '.';

static NEXT_BOARD_ID: AtomicU64 = AtomicU64::new(0);

/// Non-owning handle identifying one `Board` instance for the life of the process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct BoardId(u64);

impl BoardId {
    fn next() -> Self {
        BoardId(NEXT_BOARD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Debug)]
pub struct Board {
    id: BoardId,
    grid: [[Option<Piece>; SIZE]; SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new_filled()
    }
}

/// Cloning goes through [`Board::copy`] so the clone gets its own id.
impl Clone for Board {
    fn clone(&self) -> Self {
        self.copy()
    }
}

impl Board {
    /// Builds a board, filled with the starting layout when `fill` is true.
    pub fn new(fill: bool) -> Self {
        let mut board = Self {
            id: BoardId::next(),
            grid: [[None; SIZE]; SIZE],
        };
        if fill {
            board.fill_grid();
        }
        board
    }

    #[inline]
    pub fn new_filled() -> Self {
        Self::new(true)
    }

    #[inline]
    pub fn new_empty() -> Self {
        Self::new(false)
    }

    #[inline]
    pub fn id(&self) -> BoardId {
        self.id
    }

    /// Returns true when both coordinates lie in `0..8`.
    #[inline]
    pub fn is_valid_position(pos: Position) -> bool {
        board_location::is_valid_position(&pos)
    }

    /// The piece at `pos`, or `None` for an empty cell.
    pub fn get(&self, pos: Position) -> Result<Option<Piece>, BoardErrors> {
        let (row, col) = position_to_indices(&pos)?;
        Ok(self.grid[row][col])
    }

    /// Stores `piece` (or clears the cell for `None`) at `pos`, overwriting
    /// whatever was there, and returns the previous occupant.
    ///
    /// The stored piece is rebound to this board and to `pos`, so a piece
    /// taken from another cell or another board always reports where it now
    /// lives. The same piece is not removed from its previous cell.
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) -> Result<Option<Piece>, BoardErrors> {
        let (row, col) = position_to_indices(&pos)?;
        let stored = piece.map(|p| p.rebound(self.id, pos));
        Ok(std::mem::replace(&mut self.grid[row][col], stored))
    }

    /// Clears `pos` and returns what was there.
    #[inline]
    pub fn take(&mut self, pos: Position) -> Result<Option<Piece>, BoardErrors> {
        self.set(pos, None)
    }

    /// True when no piece occupies `pos`.
    #[inline]
    pub fn is_empty(&self, pos: Position) -> Result<bool, BoardErrors> {
        Ok(self.get(pos)?.is_none())
    }

    /// Builds a new piece bound to this board and stores it at `pos` in one step.
    pub fn place_new_piece(&mut self, pos: Position, color: PieceColor) -> Result<Piece, BoardErrors> {
        position_to_indices(&pos)?;
        Ok(self.place_at(pos, color))
    }

    /// Placement for positions already known to be on the board.
    pub(crate) fn place_at(&mut self, pos: Position, color: PieceColor) -> Piece {
        let piece = Piece::bound_to(color, self.id, pos);
        self.grid[pos.0 as usize][pos.1 as usize] = Some(piece);
        piece
    }

    /// Independent duplicate: a fresh empty board onto which every piece of
    /// this one is copied, row by row.
    pub fn copy(&self) -> Board {
        let mut duped_board = Board::new_empty();
        for piece in self.pieces() {
            piece.copy_onto(&mut duped_board);
        }
        duped_board
    }

    /// One line per row, `.` for empty cells, no trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(SIZE * (SIZE + 1));
        for (row_idx, row) in self.grid.iter().enumerate() {
            if row_idx > 0 {
                out.push('\n');
            }
            for cell in row {
                out.push(cell.map_or(EMPTY_GLYPH, |piece| piece.glyph()));
            }
        }
        out
    }

    /// Writes [`Board::render`] to stdout.
    pub fn print(&self) {
        println!("{}", self.render());
    }

    /// Occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.grid.iter().flat_map(|row| row.iter().filter_map(|cell| *cell))
    }

    pub fn count_pieces(&self, color: PieceColor) -> usize {
        self.pieces().filter(|piece| piece.color() == color).count()
    }

    /// Checks that every stored piece reports its own cell and this board.
    pub fn is_consistent(&self) -> bool {
        self.grid.iter().enumerate().all(|(row, cells)| {
            cells.iter().enumerate().all(|(col, cell)| match cell {
                Some(piece) => {
                    piece.board() == self.id && piece.position() == (row as i8, col as i8)
                }
                None => true,
            })
        })
    }

    fn fill_grid(&mut self) {
        for row in FIRST_COLOR_ROWS {
            self.fill_row(row, PieceColor::Red);
        }
        for row in SECOND_COLOR_ROWS {
            self.fill_row(row, PieceColor::Black);
        }
    }

    fn fill_row(&mut self, row: i8, color: PieceColor) {
        for col in 0..BOARD_SIZE {
            if is_playable_square(&(row, col)) {
                self.place_at((row, col), color);
            }
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
