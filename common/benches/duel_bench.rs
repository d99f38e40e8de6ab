use common::games::tictactoe::{Board, DuelSettings, check_win_with_line, run_duel};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_full_duel(c: &mut Criterion) {
    let mut seed = 0u64;
    c.bench_function("duel_two_threads_zero_delay", |b| {
        b.iter(|| {
            seed = seed.wrapping_add(1);
            run_duel(&DuelSettings::new(seed), &())
        });
    });
}

fn bench_check_win(c: &mut Criterion) {
    let boards = [
        Board::from_rows(["XOX", "XOO", "OXX"]),
        Board::from_rows(["X O", " XO", "  X"]),
        Board::from_rows(["   ", "   ", "OOO"]),
    ];

    c.bench_function("check_win_three_boards", |b| {
        b.iter(|| {
            for board in &boards {
                black_box(check_win_with_line(black_box(board)));
            }
        });
    });
}

criterion_group!(benches, bench_full_duel, bench_check_win);
criterion_main!(benches);
