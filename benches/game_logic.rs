use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::GameState;
use tui_snake::types::{Direction, GamePhase};

fn bench_step(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("game_step", |b| {
        b.iter(|| {
            if state.phase() != GamePhase::Running {
                state.restart();
                state.start();
            }
            state.step();
        })
    });
}

fn bench_set_direction(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("set_direction", |b| {
        b.iter(|| {
            state.set_direction(black_box(Direction::Up));
            state.set_direction(black_box(Direction::Right));
        })
    });
}

fn bench_restart(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    state.start();

    c.bench_function("restart_with_food_placement", |b| {
        b.iter(|| {
            state.restart();
        })
    });
}

criterion_group!(benches, bench_step, bench_set_direction, bench_restart);
criterion_main!(benches);
