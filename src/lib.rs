//! Crate root module declarations for the checkers board model.
//!
//! Exposes positions, piece colours, the crate error type, the board/piece
//! model with its snapshot history, and text-format utilities so binaries,
//! benches and external tooling can import stable module paths.

pub mod board_errors;
pub mod board_location;
pub mod piece_color;

pub mod board_state {
    pub mod board;
    pub mod board_history;
    pub mod board_rules;
    pub mod piece;
}

pub mod utils {
    pub mod algebraic;
    pub mod layout_generator;
    pub mod layout_parser;
    pub mod random_layout;
    pub mod render_board;
}
