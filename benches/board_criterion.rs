use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};

use checkers_board::board_state::board::Board;
use checkers_board::utils::layout_generator::generate_layout;
use checkers_board::utils::layout_parser::parse_layout;
use checkers_board::utils::random_layout::{random_board, RandomLayoutConfig};

const OCCUPANCIES: &[u8] = &[0, 25, 50, 100];

fn boards_by_occupancy() -> Vec<(u8, Board)> {
    OCCUPANCIES
        .iter()
        .map(|&percent| {
            let config = RandomLayoutConfig {
                occupancy: f64::from(percent) / 100.0,
                playable_squares_only: false,
            };
            let mut rng = StdRng::seed_from_u64(u64::from(percent));
            (percent, random_board(&mut rng, &config))
        })
        .collect()
}

fn bench_copy(c: &mut Criterion) {
    let mut group = c.benchmark_group("board_copy");
    for (percent, board) in boards_by_occupancy() {
        group.bench_with_input(BenchmarkId::from_parameter(percent), &board, |b, board| {
            b.iter(|| black_box(board.copy()))
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let board = Board::new_filled();
    c.bench_function("board_render_filled", |b| {
        b.iter(|| black_box(black_box(&board).render()))
    });
}

fn bench_layout_round_trip(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_round_trip");
    for (percent, board) in boards_by_occupancy() {
        let layout = generate_layout(&board);
        group.bench_with_input(BenchmarkId::from_parameter(percent), &layout, |b, layout| {
            b.iter(|| {
                let parsed = parse_layout(black_box(layout)).expect("generated layout should parse");
                black_box(generate_layout(&parsed))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_copy, bench_render, bench_layout_round_trip);
criterion_main!(benches);
