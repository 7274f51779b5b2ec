//! Criterion benchmarks for combination search.
//!
//! Inputs are seeded random cent amounts, the typical reconciliation load.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_combsearch::combination::{AcceptPolicy, Cell, CombinationRunner, SearchConfig, SignMode};

fn amounts(n: usize, seed: u64) -> Vec<Cell> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Cell::from(rng.random_range(1..10_000_u32) as f64 / 100.0))
        .collect()
}

fn bench_same_sign(c: &mut Criterion) {
    let mut group = c.benchmark_group("same_sign_bounded");
    group.sample_size(10);

    for &n in &[12usize, 16, 20] {
        let values = amounts(n, 42);
        let config = SearchConfig::default().with_tolerance(0.005);
        group.bench_with_input(BenchmarkId::from_parameter(n), &(values, config), |b, (v, c)| {
            b.iter(|| {
                let result = CombinationRunner::run(black_box(v), black_box(150.0), black_box(c));
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_signed_free(c: &mut Criterion) {
    let mut group = c.benchmark_group("signed_free");
    group.sample_size(10);

    for (n, policy) in [
        (14usize, AcceptPolicy::PrefixAccept),
        (14, AcceptPolicy::Complete),
        (18, AcceptPolicy::PrefixAccept),
    ] {
        let mut rng = StdRng::seed_from_u64(7);
        let values: Vec<Cell> = (0..n)
            .map(|_| Cell::from(rng.random_range(-50..=50_i32) as f64))
            .collect();
        let config = SearchConfig::default()
            .with_mode(SignMode::SignedFree)
            .with_policy(policy);
        group.bench_with_input(
            BenchmarkId::new(format!("{policy:?}"), n),
            &(values, config),
            |b, (v, c)| {
                b.iter(|| {
                    let result = CombinationRunner::run(black_box(v), black_box(10.0), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_same_sign, bench_signed_free);
criterion_main!(benches);
