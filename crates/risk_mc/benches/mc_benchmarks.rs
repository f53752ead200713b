//! Criterion benchmarks for the Monte Carlo simulation engine.
//!
//! Benchmarks cover:
//! - Single-factor path generation at varying simulation counts
//! - Correlated path generation at varying asset counts
//! - VaR extraction from a simulated terminal distribution

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use risk_core::types::{ConfidenceLevel, ReturnsMatrix, WeightVector};
use risk_mc::{monte_carlo_var, MonteCarloConfig, MonteCarloSimulator};

/// Generates a synthetic return matrix with deterministic pseudo-noise.
fn synthetic_returns(n_periods: usize, n_assets: usize) -> ReturnsMatrix {
    let data: Vec<f64> = (0..n_periods * n_assets)
        .map(|i| {
            let wave = ((i * 37 + 11) % 200) as f64 / 200.0 - 0.5;
            0.0005 + 0.02 * wave
        })
        .collect();
    ReturnsMatrix::new(data, n_assets).expect("synthetic matrix is well formed")
}

fn equal_weights(n_assets: usize) -> WeightVector {
    WeightVector::new(vec![1.0 / n_assets as f64; n_assets]).expect("weights are finite")
}

fn bench_single_factor(c: &mut Criterion) {
    let returns = synthetic_returns(500, 4);
    let weights = equal_weights(4);

    let mut group = c.benchmark_group("single_factor_paths");
    for n_simulations in [1_000usize, 10_000] {
        let config = MonteCarloConfig::builder()
            .n_simulations(n_simulations)
            .horizon_days(252)
            .seed(42)
            .build()
            .unwrap();
        let simulator = MonteCarloSimulator::new(config);
        group.bench_with_input(
            BenchmarkId::from_parameter(n_simulations),
            &n_simulations,
            |b, _| {
                b.iter(|| {
                    simulator
                        .simulate_single_factor(
                            black_box(&returns),
                            black_box(&weights),
                            1_000_000.0,
                        )
                        .unwrap()
                })
            },
        );
    }
    group.finish();
}

fn bench_correlated(c: &mut Criterion) {
    let mut group = c.benchmark_group("correlated_paths");
    for n_assets in [2usize, 6, 12] {
        let returns = synthetic_returns(500, n_assets);
        let weights = equal_weights(n_assets);
        let config = MonteCarloConfig::builder()
            .n_simulations(1_000)
            .horizon_days(60)
            .seed(42)
            .build()
            .unwrap();
        let simulator = MonteCarloSimulator::new(config);
        group.bench_with_input(BenchmarkId::from_parameter(n_assets), &n_assets, |b, _| {
            b.iter(|| {
                simulator
                    .simulate_correlated(black_box(&returns), black_box(&weights), 1_000_000.0)
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_var_extraction(c: &mut Criterion) {
    let returns = synthetic_returns(500, 4);
    let weights = equal_weights(4);
    let config = MonteCarloConfig::builder()
        .n_simulations(10_000)
        .horizon_days(252)
        .seed(42)
        .build()
        .unwrap();
    let simulator = MonteCarloSimulator::new(config);
    let paths = simulator
        .simulate_single_factor(&returns, &weights, 1_000_000.0)
        .unwrap();

    c.bench_function("monte_carlo_var_10k", |b| {
        b.iter(|| {
            monte_carlo_var(black_box(paths.clone()), ConfidenceLevel::default()).unwrap()
        })
    });
}

criterion_group!(
    benches,
    bench_single_factor,
    bench_correlated,
    bench_var_extraction
);
criterion_main!(benches);
