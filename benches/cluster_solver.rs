use criterion::{black_box, criterion_group, criterion_main, Criterion};
use blockpop::core::{ClusterSolver, Grid2D, Simulation, SimpleRng};
use blockpop::types::{BlockStyle, GridPos, LevelConfig, Piece};

fn config(width: u8, height: u8, palette_len: usize) -> LevelConfig {
    LevelConfig {
        width,
        height,
        palette: (0..palette_len)
            .map(|i| BlockStyle {
                color: i as u32,
                icon: i as u32,
            })
            .collect(),
        power_icons: vec![0, 1, 2, 3],
        power_hints: vec![0, 1, 2],
    }
}

fn random_board(width: u8, height: u8, variants: u32, seed: u32) -> Grid2D<Piece> {
    let mut rng = SimpleRng::new(seed);
    let mut grid = Grid2D::new(width, height);
    for i in 0..grid.len() {
        grid[i] = Piece::block(rng.next_range(variants) as u8);
    }
    grid
}

fn bench_solve(c: &mut Criterion) {
    let grid = random_board(32, 32, 4, 1235);
    let mut solver = ClusterSolver::new(32, 32);

    c.bench_function("solve_32x32_4_variants", |b| {
        b.iter(|| {
            solver.solve(black_box(&grid));
        })
    });
}

fn bench_solve_worst_case(c: &mut Criterion) {
    // One variant: a single board-sized cluster maximizes chain walks.
    let grid = random_board(32, 32, 1, 1235);
    let mut solver = ClusterSolver::new(32, 32);

    c.bench_function("solve_32x32_uniform", |b| {
        b.iter(|| {
            solver.solve(black_box(&grid));
        })
    });
}

fn bench_resolve_cycle(c: &mut Criterion) {
    let mut sim = Simulation::new(config(16, 16, 4), 1235).unwrap();
    let center = GridPos::new(8, 8);

    c.bench_function("resolve_cycle_16x16", |b| {
        b.iter(|| {
            // The board is always full between steps, so this always hits.
            sim.resolve_at(black_box(center)).unwrap();
        })
    });
}

criterion_group!(
    benches,
    bench_solve,
    bench_solve_worst_case,
    bench_resolve_cycle
);
criterion_main!(benches);
