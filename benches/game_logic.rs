use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_puyo::core::{Board, GameState};

fn bench_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("gravity_step", |b| {
        b.iter(|| {
            state.step();
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(0, black_box(1));
            state.try_move(0, black_box(-1));
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.try_rotate();
        })
    });
}

fn bench_clear_groups(c: &mut Criterion) {
    c.bench_function("clear_full_width_group", |b| {
        b.iter(|| {
            let mut board = Board::from_rows(&[
                "", "", "", "", "", "", "", "", "", "",
                "GGGGGG",
                "RRRRRR",
            ]);
            board.clear_groups();
            black_box(board);
        })
    });
}

fn bench_settle_chain(c: &mut Criterion) {
    c.bench_function("settle_two_link_chain", |b| {
        b.iter(|| {
            let mut board = Board::from_rows(&[
                "", "", "", "", "", "", "", "",
                " R",
                " R",
                " RG",
                "RGGG",
            ]);
            black_box(board.settle());
        })
    });
}

criterion_group!(
    benches,
    bench_step,
    bench_try_move,
    bench_try_rotate,
    bench_clear_groups,
    bench_settle_chain
);
criterion_main!(benches);
