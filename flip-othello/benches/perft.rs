use criterion::*;

use flip_othello::test_utils::run_perft;
use flip_othello::{CaptureRule, Game};

fn criterion_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(50);

    for depth in 1..4 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| run_perft(black_box(depth)))
        });
    }

    group.finish();
}

fn criterion_apply_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_move");

    for (name, rule) in [
        ("longest-run", CaptureRule::LongestRun),
        ("all-directions", CaptureRule::AllDirections),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut game = Game::new(rule);
                game.play(black_box(4), black_box(3))
            })
        });
    }

    group.finish();
}

criterion_group!(perft, criterion_perft, criterion_apply_move);
criterion_main!(perft);
