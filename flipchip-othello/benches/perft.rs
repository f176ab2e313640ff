use criterion::*;

use flipchip_othello::test_utils::run_perft;
use flipchip_othello::{best_move, Board, PlayOrder, Player};

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(50);

    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_best_move(c: &mut Criterion) {
    let board = Board::starting();
    let order = PlayOrder::identity();

    c.bench_function("best_move opening", |b| {
        b.iter(|| best_move(black_box(&board), &order, Player::Black, false))
    });
    c.bench_function("any_move opening", |b| {
        b.iter(|| best_move(black_box(&board), &order, Player::White, true))
    });
}

criterion_group!(perft, criterion_perft, criterion_best_move);
criterion_main!(perft);
