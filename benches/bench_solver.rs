use criterion::{criterion_group, criterion_main, Criterion};

use beamcube::facelet::FaceCube;
use beamcube::moves::Move::*;
use beamcube::solver::{solver, SolverConfig};

fn fc_rotate() {
    let mut fc = FaceCube::solved();
    fc.rotate(U);
}

fn fc_apply_moves() {
    let fc = FaceCube::solved();
    let _ = fc.apply_moves(&[R, U, R, R, R, U, U, U]);
}

fn bench_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("FaceCube Moves");
    group.bench_function("rotate", |b| b.iter(|| fc_rotate()));
    group.bench_function("apply_moves", |b| b.iter(|| fc_apply_moves()));
    group.finish();
}

fn bench_costs(c: &mut Criterion) {
    let fc = FaceCube::solved().apply_moves(&[R, U, F, D, L, B]);
    let mut group = c.benchmark_group("FaceCube Costs");
    group.bench_function("cube_cost", |b| b.iter(|| fc.cube_cost()));
    group.bench_function("naive_cost", |b| b.iter(|| fc.naive_cost()));
    group.finish();
}

fn bench_solver(c: &mut Criterion) {
    let config = SolverConfig {
        expansion_depth: 4,
        recrawl_depth: 3,
        beam_width: 10,
        rounds: 1,
    };
    let scrambled = FaceCube::solved().apply_moves(&[U, F, R]);
    c.bench_function("Solver", |b| b.iter(|| solver(&scrambled, &config).unwrap()));
}

criterion_group!(benches, bench_solver, bench_moves, bench_costs);
criterion_main!(benches);
