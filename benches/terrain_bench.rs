//! Criterion benchmarks for the window searches.
//!
//! Uses a synthetic rugged terrain so the numbers reflect search overhead
//! rather than any particular elevation file.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_terrain::grid::{Anchor, GridModel};
use u_terrain::hc::HillClimber;
use u_terrain::objective::variation;
use u_terrain::restart::{RestartConfig, RestartRunner};
use u_terrain::sa::{SaConfig, SimulatedAnnealer};

// ===========================================================================
// Terrain: overlapping sine ridges
// ===========================================================================

fn terrain(size: usize) -> GridModel {
    let rows: Vec<Vec<f64>> = (0..size)
        .map(|r| {
            (0..size)
                .map(|c| {
                    let (x, y) = (r as f64, c as f64);
                    (x * 0.31).sin() * 40.0 + (y * 0.17).cos() * 25.0 + ((x + y) * 0.9).sin() * 5.0
                })
                .collect()
        })
        .collect();
    GridModel::from_rows(rows).expect("synthetic terrain is valid")
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_variation(c: &mut Criterion) {
    let grid = terrain(64);
    c.bench_function("variation", |b| {
        b.iter(|| variation(black_box(&grid), black_box(Anchor::new(17, 23))))
    });
}

fn bench_hill_climb(c: &mut Criterion) {
    let mut group = c.benchmark_group("hill_climb");

    for &size in &[32usize, 128, 512] {
        let grid = terrain(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, g| {
            b.iter(|| black_box(HillClimber.run(black_box(g), Anchor::new(0, 0))))
        });
    }
    group.finish();
}

fn bench_simulated_annealing(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulated_annealing");
    group.sample_size(10);

    let sa = SimulatedAnnealer::new(SaConfig::default()).expect("default config is valid");
    for &size in &[32usize, 128] {
        let grid = terrain(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, g| {
            b.iter(|| {
                let mut rng = StdRng::seed_from_u64(42);
                black_box(sa.run(black_box(g), Anchor::new(0, 0), &mut rng))
            })
        });
    }
    group.finish();
}

fn bench_random_restart(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_restart_hc");
    group.sample_size(10);

    let config = RestartConfig::default().with_seed(42);
    for &size in &[64usize, 256] {
        let grid = terrain(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &grid, |b, g| {
            b.iter(|| black_box(RestartRunner::run(black_box(g), &HillClimber, &config)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_variation,
    bench_hill_climb,
    bench_simulated_annealing,
    bench_random_restart
);
criterion_main!(benches);
