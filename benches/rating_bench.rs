use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use chess_rating::core::{board_from_fen, standard_setup};
use chess_rating::{EvalConfig, EvalInputs, Rating, Side};

const MIDDLEGAME_FEN: &str = "r1bq1rk1/pp2bppp/2n1pn2/3p4/2PP4/2N1PN2/PP3PPP/R2QKB1R w KQ - 0 8";

fn bench_rate_start(c: &mut Criterion) {
    let rating = Rating::new(Arc::new(EvalConfig::default())).unwrap();
    let board = standard_setup();
    let inputs = EvalInputs::new(20, 4).unwrap();
    c.bench_function("rate_start_position", |b| {
        b.iter(|| rating.rate(black_box(&board), black_box(Side::White), black_box(inputs)))
    });
}

fn bench_rate_middlegame(c: &mut Criterion) {
    let rating = Rating::new(Arc::new(EvalConfig::default())).unwrap();
    let (board, side) = board_from_fen(MIDDLEGAME_FEN).unwrap();
    let inputs = EvalInputs::new(35, 4).unwrap();
    c.bench_function("rate_middlegame", |b| {
        b.iter(|| rating.rate(black_box(&board), black_box(side), black_box(inputs)))
    });
}

fn bench_rate_batch(c: &mut Criterion) {
    let rating = Rating::new(Arc::new(EvalConfig::default())).unwrap();
    let (board, side) = board_from_fen(MIDDLEGAME_FEN).unwrap();
    let positions = vec![(board, side, EvalInputs::new(35, 4).unwrap()); 256];
    c.bench_function("rate_batch_256", |b| {
        b.iter(|| rating.rate_batch(black_box(&positions)))
    });
}

criterion_group!(
    benches,
    bench_rate_start,
    bench_rate_middlegame,
    bench_rate_batch
);
criterion_main!(benches);
