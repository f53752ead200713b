//! End-to-end properties of the assembled risk engine.

use approx::assert_relative_eq;
use risk_core::types::{ConfidenceLevel, ReturnsMatrix, RiskError, Stage, WeightVector};
use risk_engine::{EngineConfig, RiskEngine};
use risk_mc::{monte_carlo_var, MonteCarloConfig, MonteCarloSimulator};
use risk_metrics::var::VarCalculator;

/// A fixed 20-observation, two-asset return sample.
fn sample_returns() -> ReturnsMatrix {
    ReturnsMatrix::from_rows(&[
        vec![0.0120, -0.0040],
        vec![-0.0210, 0.0080],
        vec![0.0030, 0.0010],
        vec![-0.0070, -0.0130],
        vec![0.0150, 0.0060],
        vec![-0.0020, 0.0040],
        vec![0.0080, -0.0090],
        vec![-0.0160, 0.0020],
        vec![0.0050, 0.0100],
        vec![0.0010, -0.0060],
        vec![0.0190, 0.0030],
        vec![-0.0240, -0.0110],
        vec![0.0060, 0.0070],
        vec![-0.0030, -0.0020],
        vec![0.0110, 0.0150],
        vec![-0.0090, 0.0050],
        vec![0.0040, -0.0170],
        vec![0.0170, 0.0090],
        vec![-0.0130, -0.0050],
        vec![0.0020, 0.0120],
    ])
    .unwrap()
}

fn weights() -> WeightVector {
    WeightVector::new(vec![0.6, 0.4]).unwrap()
}

#[test]
fn historical_var_non_decreasing_in_confidence() {
    let returns = sample_returns();
    let w = weights();
    let mut previous = f64::NEG_INFINITY;
    for level in [0.90, 0.95, 0.975, 0.99] {
        let calculator = VarCalculator::new(ConfidenceLevel::new(level).unwrap());
        let record = calculator.historical(&returns, &w, 1_000_000.0).unwrap();
        assert!(
            record.var_value >= previous,
            "historical VaR decreased moving to confidence {}",
            level
        );
        previous = record.var_value;
    }
}

#[test]
fn expected_shortfall_dominates_var() {
    let calculator = VarCalculator::new(ConfidenceLevel::default());
    let historical = calculator
        .historical(&sample_returns(), &weights(), 1_000_000.0)
        .unwrap();
    let es = calculator
        .expected_shortfall(&historical.portfolio_returns, 1_000_000.0)
        .unwrap();
    assert!(!es.tail_losses.is_empty());
    assert!(es.es_value >= historical.var_value);
}

#[test]
fn fixed_seed_reproduces_both_simulations() {
    let config = MonteCarloConfig::builder()
        .n_simulations(256)
        .horizon_days(30)
        .seed(42)
        .build()
        .unwrap();
    let simulator = MonteCarloSimulator::new(config);
    let returns = sample_returns();
    let w = weights();

    let a = simulator
        .simulate_single_factor(&returns, &w, 1_000_000.0)
        .unwrap();
    let b = simulator
        .simulate_single_factor(&returns, &w, 1_000_000.0)
        .unwrap();
    assert_eq!(a, b);

    let (paths_a, tensor_a) = simulator
        .simulate_correlated(&returns, &w, 1_000_000.0)
        .unwrap();
    let (paths_b, tensor_b) = simulator
        .simulate_correlated(&returns, &w, 1_000_000.0)
        .unwrap();
    assert_eq!(paths_a, paths_b);
    assert_eq!(tensor_a, tensor_b);
}

#[test]
fn weight_mismatch_fails_every_stage_without_partial_output() {
    let returns = sample_returns();
    let bad = WeightVector::new(vec![0.5, 0.3, 0.2]).unwrap();

    let engine = RiskEngine::new(EngineConfig::builder().build().unwrap()).unwrap();
    let result = engine.analyse(&returns, &bad, 1_000_000.0);
    assert!(matches!(result, Err(RiskError::InvalidInput { .. })));

    let calculator = VarCalculator::new(ConfidenceLevel::default());
    assert_eq!(
        calculator
            .historical(&returns, &bad, 1_000_000.0)
            .unwrap_err()
            .stage(),
        Some(Stage::Historical)
    );
    assert_eq!(
        calculator
            .parametric(&returns, &bad, 1_000_000.0)
            .unwrap_err()
            .stage(),
        Some(Stage::Parametric)
    );
}

#[test]
fn correlated_portfolio_path_equals_asset_sum() {
    let config = MonteCarloConfig::builder()
        .n_simulations(64)
        .horizon_days(20)
        .seed(42)
        .build()
        .unwrap();
    let (portfolio, tensor) = MonteCarloSimulator::new(config)
        .simulate_correlated(&sample_returns(), &weights(), 1_000_000.0)
        .unwrap();

    for path in 0..tensor.n_paths() {
        for step in 0..tensor.n_steps() {
            let sum: f64 = tensor.asset_row(step, path).iter().sum();
            assert_relative_eq!(portfolio.value(step, path), sum, max_relative = 1e-9);
        }
    }
}

#[test]
fn horizon_of_one_applies_no_shocks() {
    let config = MonteCarloConfig::builder()
        .n_simulations(128)
        .horizon_days(1)
        .seed(42)
        .build()
        .unwrap();
    let paths = MonteCarloSimulator::new(config)
        .simulate_single_factor(&sample_returns(), &weights(), 1_000_000.0)
        .unwrap();

    assert_eq!(paths.n_steps(), 1);
    for path in 0..paths.n_paths() {
        assert_eq!(paths.value(0, path), 1_000_000.0);
    }
}

#[test]
fn parametric_var_matches_normal_quantile_formula() {
    let returns = sample_returns();
    let w = weights();
    let calculator = VarCalculator::new(ConfidenceLevel::new(0.95).unwrap());
    let record = calculator.parametric(&returns, &w, 1_000_000.0).unwrap();

    // Recompute the series moments independently of the calculator.
    let series = returns.portfolio_returns(&w).unwrap();
    let n = series.len() as f64;
    let mu = series.iter().sum::<f64>() / n;
    let sigma =
        (series.iter().map(|r| (r - mu) * (r - mu)).sum::<f64>() / (n - 1.0)).sqrt();

    // z at 95% is 1.6449 to four decimal places.
    assert_relative_eq!(record.var_fraction, -(mu - 1.6449 * sigma), epsilon = 1e-4);
    assert_relative_eq!(
        record.var_value,
        record.var_fraction * 1_000_000.0,
        epsilon = 1e-9
    );
    assert_relative_eq!(record.mean, mu, epsilon = 1e-15);
    assert_relative_eq!(record.std, sigma, epsilon = 1e-15);
}

#[test]
fn full_report_is_internally_consistent() {
    let engine = RiskEngine::new(
        EngineConfig::builder()
            .n_simulations(1_000)
            .horizon_days(21)
            .seed(42)
            .build()
            .unwrap(),
    )
    .unwrap();
    let report = engine
        .analyse(&sample_returns(), &weights(), 1_000_000.0)
        .unwrap();

    assert_eq!(report.confidence_level, 0.95);
    assert_relative_eq!(
        report.historical.var_value,
        report.historical.var_fraction * 1_000_000.0,
        epsilon = 1e-9
    );
    assert!(report.expected_shortfall.es_value >= report.historical.var_value);
    assert_eq!(report.monte_carlo.paths.n_paths(), 1_000);
    assert_eq!(report.monte_carlo.paths.n_steps(), 21);

    // The Monte Carlo record agrees with a manual extraction from the
    // same seed.
    let paths = MonteCarloSimulator::new(*engine.config().monte_carlo())
        .simulate_single_factor(&sample_returns(), &weights(), 1_000_000.0)
        .unwrap();
    let manual = monte_carlo_var(paths, ConfidenceLevel::default()).unwrap();
    assert_eq!(manual, report.monte_carlo);
}
