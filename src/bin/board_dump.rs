//! Prints a board, its compact layout and piece counts.
//!
//! Usage:
//! `cargo run --bin board_dump`
//! `cargo run --bin board_dump -- --empty`
//! `cargo run --bin board_dump -- --layout 8/8/8/3r4/8/8/8/8 --coordinates`
//! `cargo run --bin board_dump -- --seed 42 --occupancy 30`

use rand::{rngs::StdRng, SeedableRng};

use checkers_board::board_state::board::Board;
use checkers_board::piece_color::PieceColor;
use checkers_board::utils::layout_generator::generate_layout;
use checkers_board::utils::layout_parser::parse_layout;
use checkers_board::utils::random_layout::{random_board, RandomLayoutConfig};
use checkers_board::utils::render_board::render_board;

#[derive(Debug, Clone)]
struct DumpConfig {
    empty: bool,
    layout: Option<String>,
    seed: Option<u64>,
    occupancy_percent: Option<u8>,
    coordinates: bool,
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn arg_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_arg_u64(args: &[String], flag: &str) -> Result<Option<u64>, String> {
    arg_value(args, flag)
        .map(|v| v.parse::<u64>().map_err(|e| format!("{flag} {v}: {e}")))
        .transpose()
}

fn parse_arg_u8(args: &[String], flag: &str) -> Result<Option<u8>, String> {
    arg_value(args, flag)
        .map(|v| v.parse::<u8>().map_err(|e| format!("{flag} {v}: {e}")))
        .transpose()
}

impl DumpConfig {
    fn from_args(args: &[String]) -> Result<Self, String> {
        Ok(Self {
            empty: has_flag(args, "--empty"),
            layout: arg_value(args, "--layout").map(str::to_owned),
            seed: parse_arg_u64(args, "--seed")?,
            occupancy_percent: parse_arg_u8(args, "--occupancy")?,
            coordinates: has_flag(args, "--coordinates"),
        })
    }

    fn build_board(&self) -> Result<Board, String> {
        if let Some(layout) = &self.layout {
            return parse_layout(layout).map_err(|e| e.to_string());
        }

        if self.seed.is_some() || self.occupancy_percent.is_some() {
            let mut layout_config = RandomLayoutConfig::default();
            if let Some(percent) = self.occupancy_percent {
                layout_config.occupancy = f64::from(percent.min(100)) / 100.0;
            }
            let mut rng = StdRng::seed_from_u64(self.seed.unwrap_or(0));
            return Ok(random_board(&mut rng, &layout_config));
        }

        Ok(Board::new(!self.empty))
    }
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = DumpConfig::from_args(&args)?;
    let board = config.build_board()?;

    if config.coordinates {
        println!("{}", render_board(&board));
    } else {
        board.print();
    }

    println!(
        "layout={} red={} black={}",
        generate_layout(&board),
        board.count_pieces(PieceColor::Red),
        board.count_pieces(PieceColor::Black)
    );

    Ok(())
}
