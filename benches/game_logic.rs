use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockfall::core::{Board, FieldConfig, GameSnapshot, GameState};
use blockfall::types::{Intent, PieceKind};

fn started(seed: u64) -> GameState {
    let mut state = GameState::with_seed(FieldConfig::default(), seed);
    state.start();
    state
}

fn bench_tick(c: &mut Criterion) {
    let mut state = started(12345);

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            if !state.tick(black_box(16)) && state.active().is_none() {
                state.start();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new(10, 20);
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let mut state = started(12345);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            if !state.apply_intent(Intent::HardDrop) {
                state.start();
            }
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut state = started(12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            state.try_move(1, 0);
            state.try_move(-1, 0);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut state = started(12345);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            state.try_rotate(true);
        })
    });
}

fn bench_snapshot_into(c: &mut Criterion) {
    let state = started(12345);
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(black_box(&mut snap));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_try_move,
    bench_try_rotate,
    bench_snapshot_into
);
criterion_main!(benches);
