#[macro_use]
extern crate criterion;

use criterion::{black_box, BenchmarkId, Criterion};
use layered_connect_four::{
    drop_piece, is_winner, BoardConfig, GameSimulator, GraphBoard, Player, ProbabilityEstimator,
    SimulationConfig,
};
use rand::{rngs::StdRng, SeedableRng};
use std::time::Duration;

/// Plays alternating moves into open columns until `moves` pieces are down
fn played_board(config: &BoardConfig, moves: usize, rng: &mut StdRng) -> GraphBoard {
    let mut board = GraphBoard::generate(config, rng).unwrap();
    for turn in 0..moves {
        let open = board.open_columns();
        if open.is_empty() {
            break;
        }
        let column = open[turn % open.len()];
        drop_piece(&mut board, column, Player::for_turn(turn), rng).unwrap();
    }
    board
}

fn bench_board(c: &mut Criterion) {
    let mut group = c.benchmark_group("board");
    group.measurement_time(Duration::from_secs(5));

    // Generation and a single drop at several densities
    for p in [0.2, 0.4, 0.8].iter() {
        let config = BoardConfig::default().with_edge_probability(*p);

        group.bench_with_input(BenchmarkId::new("generate", p), p, |b, &_| {
            let mut rng = StdRng::seed_from_u64(1);
            b.iter(|| black_box(GraphBoard::generate(&config, &mut rng).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("drop", p), p, |b, &_| {
            let mut rng = StdRng::seed_from_u64(2);
            let board = GraphBoard::generate(&config, &mut rng).unwrap();
            b.iter(|| {
                let mut trial = board.clone();
                black_box(drop_piece(&mut trial, 3, Player::Red, &mut rng).unwrap())
            })
        });
    }

    // Winner detection on boards with more and more pieces
    for moves in [8, 16, 24].iter() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = BoardConfig::default().with_edge_probability(0.5);
        let board = played_board(&config, *moves, &mut rng);

        group.bench_with_input(BenchmarkId::new("is_winner", moves), moves, |b, &_| {
            b.iter(|| black_box(is_winner(&board, Player::Red)))
        });
    }

    group.finish();
}

fn bench_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    group.measurement_time(Duration::from_secs(5));

    let mut rng = StdRng::seed_from_u64(4);
    let board = played_board(&BoardConfig::default(), 10, &mut rng);

    group.bench_function("single_board", |b| {
        let estimator = ProbabilityEstimator::default();
        b.iter(|| black_box(estimator.estimate(&board, Player::Red, &mut rng).unwrap()))
    });

    for trials in [5, 50].iter() {
        group.bench_with_input(BenchmarkId::new("averaged", trials), trials, |b, &trials| {
            let estimator = ProbabilityEstimator::new().with_trials(trials);
            b.iter(|| {
                black_box(
                    estimator
                        .estimate_averaged(&board, Player::Red, &mut rng)
                        .unwrap(),
                )
            })
        });
    }

    group.finish();
}

fn bench_games(c: &mut Criterion) {
    let mut group = c.benchmark_group("games");
    group.measurement_time(Duration::from_secs(10));

    for p in [0.3, 0.6].iter() {
        let config = SimulationConfig::default()
            .with_board(BoardConfig::default().with_edge_probability(*p))
            .with_seed(5);

        group.bench_with_input(BenchmarkId::new("play_game", p), p, |b, &_| {
            let mut simulator = GameSimulator::new(config.clone()).unwrap();
            b.iter(|| black_box(simulator.play_game().unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_board, bench_estimate, bench_games);
criterion_main!(benches);
