//! Random board layouts for tests, benchmarks and the dump binary.

use rand::Rng;

use crate::board_state::board::Board;
use crate::board_state::board_rules::{is_playable_square, BOARD_SIZE};
use crate::piece_color::PieceColor;

/// Controls how [`random_board`] fills a board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RandomLayoutConfig {
    /// Chance in `[0, 1]` that a candidate cell receives a piece. Values
    /// outside the range are clamped.
    pub occupancy: f64,
    /// Restrict candidates to squares where `(row + col)` is even.
    pub playable_squares_only: bool,
}

impl Default for RandomLayoutConfig {
    fn default() -> Self {
        Self {
            occupancy: 0.5,
            playable_squares_only: true,
        }
    }
}

/// Builds an empty board and fills candidate cells at random, each with a
/// uniformly chosen colour.
pub fn random_board<R: Rng>(rng: &mut R, config: &RandomLayoutConfig) -> Board {
    let occupancy = if config.occupancy.is_nan() {
        0.0
    } else {
        config.occupancy.clamp(0.0, 1.0)
    };
    let mut board = Board::new_empty();

    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = (row, col);
            if config.playable_squares_only && !is_playable_square(&pos) {
                continue;
            }
            if !rng.random_bool(occupancy) {
                continue;
            }
            let color = if rng.random_bool(0.5) {
                PieceColor::Red
            } else {
                PieceColor::Black
            };
            board.place_at(pos, color);
        }
    }

    board
}
