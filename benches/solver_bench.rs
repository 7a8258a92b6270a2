//! Criterion benchmarks for the tour-construction solvers.
//!
//! Uses deterministic pseudo-random point sets so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_tsp::aco::AcoConfig;
use u_tsp::models::Location;
use u_tsp::solver::{solve_aco, solve_greedy};

fn random_locations(n: usize, seed: u64) -> Vec<Location> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Location::new(rng.random_range(0.0..500.0), rng.random_range(0.0..500.0)))
        .collect()
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_multi_start");
    group.sample_size(10);

    for &n in &[25, 50, 100] {
        let locations = random_locations(n, 42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &locations, |b, locs| {
            b.iter(|| {
                let solution = solve_greedy(black_box(locs));
                black_box(solution)
            })
        });
    }
    group.finish();
}

fn bench_aco(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco");
    group.sample_size(10);

    for &n in &[25, 50, 100] {
        let locations = random_locations(n, 42);
        let config = AcoConfig::default().with_max_iterations(200).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(locations, config),
            |b, (locs, cfg)| {
                b.iter(|| {
                    let solution = solve_aco(black_box(locs), Some(black_box(cfg)));
                    black_box(solution)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_greedy, bench_aco);
criterion_main!(benches);
