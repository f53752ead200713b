//! Full-portfolio risk analysis and the aggregated report record.

use serde::{Deserialize, Serialize};
use tracing::info;

use risk_core::types::{ReturnsMatrix, RiskError, WeightVector};
use risk_mc::{monte_carlo_var, MonteCarloSimulator, MonteCarloVarRecord};
use risk_metrics::records::{
    ExpectedShortfallRecord, HistoricalVarRecord, ParametricVarRecord, StatsRecord,
};
use risk_metrics::stats::PortfolioStatistics;
use risk_metrics::var::VarCalculator;

use crate::config::EngineConfig;

/// Every method's output for one portfolio, under one confidence level.
///
/// A report is only produced when all five stages succeed; a failure in
/// any stage propagates instead of yielding a partial record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Confidence level shared by every method in the report.
    pub confidence_level: f64,
    /// Portfolio summary statistics.
    pub stats: StatsRecord,
    /// Historical-simulation VaR.
    pub historical: HistoricalVarRecord,
    /// Parametric (variance-covariance) VaR.
    pub parametric: ParametricVarRecord,
    /// Expected Shortfall from the historical series.
    pub expected_shortfall: ExpectedShortfallRecord,
    /// Monte Carlo VaR from the single-factor simulation.
    pub monte_carlo: MonteCarloVarRecord,
}

/// Runs every estimation method over one return sample and aggregates
/// the records.
///
/// Expected Shortfall is fed from the historical record's portfolio
/// return series rather than recomputing the dot product; Monte Carlo
/// VaR is extracted from the single-factor simulation (the correlated
/// simulation stays available on [`MonteCarloSimulator`] for callers
/// that want the per-asset tensor).
///
/// # Examples
///
/// ```rust
/// use risk_core::types::{ReturnsMatrix, WeightVector};
/// use risk_engine::{EngineConfig, RiskEngine};
///
/// let returns = ReturnsMatrix::from_rows(&[
///     vec![0.012, -0.004],
///     vec![-0.021, 0.008],
///     vec![0.003, 0.001],
///     vec![-0.007, -0.013],
///     vec![0.015, 0.006],
/// ]).unwrap();
/// let weights = WeightVector::new(vec![0.6, 0.4]).unwrap();
///
/// let config = EngineConfig::builder()
///     .n_simulations(500)
///     .horizon_days(20)
///     .build()
///     .unwrap();
/// let report = RiskEngine::new(config)
///     .unwrap()
///     .analyse(&returns, &weights, 1_000_000.0)
///     .unwrap();
///
/// assert_eq!(report.confidence_level, 0.95);
/// assert!(report.expected_shortfall.es_value >= report.historical.var_value);
/// ```
#[derive(Clone, Debug)]
pub struct RiskEngine {
    statistics: PortfolioStatistics,
    calculator: VarCalculator,
    simulator: MonteCarloSimulator,
    config: EngineConfig,
}

impl RiskEngine {
    /// Creates an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidConfig`] if the annualisation
    /// convention is rejected (cannot occur for a builder-produced
    /// configuration, which has already range-checked every option).
    pub fn new(config: EngineConfig) -> Result<Self, RiskError> {
        let statistics = PortfolioStatistics::new(config.trading_days_per_year())?;
        Ok(Self {
            statistics,
            calculator: VarCalculator::new(config.confidence()),
            simulator: MonteCarloSimulator::new(*config.monte_carlo()),
            config,
        })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs all five stages and aggregates their records.
    ///
    /// # Errors
    ///
    /// Propagates the first stage failure unchanged, tagged with the
    /// failing stage; no partial report is produced.
    pub fn analyse(
        &self,
        returns: &ReturnsMatrix,
        weights: &WeightVector,
        portfolio_value: f64,
    ) -> Result<RiskReport, RiskError> {
        info!(
            n_periods = returns.n_periods(),
            n_assets = returns.n_assets(),
            portfolio_value,
            "risk analysis started"
        );

        let stats = self.statistics.compute(returns, weights, portfolio_value)?;
        let historical = self
            .calculator
            .historical(returns, weights, portfolio_value)?;
        let parametric = self
            .calculator
            .parametric(returns, weights, portfolio_value)?;
        let expected_shortfall = self
            .calculator
            .expected_shortfall(&historical.portfolio_returns, portfolio_value)?;

        let paths = self
            .simulator
            .simulate_single_factor(returns, weights, portfolio_value)?;
        let monte_carlo = monte_carlo_var(paths, self.config.confidence())?;

        info!(
            historical_var = historical.var_value,
            parametric_var = parametric.var_value,
            expected_shortfall = expected_shortfall.es_value,
            monte_carlo_var = monte_carlo.var_value,
            "risk analysis complete"
        );

        Ok(RiskReport {
            confidence_level: self.config.confidence().value(),
            stats,
            historical,
            parametric,
            expected_shortfall,
            monte_carlo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_returns() -> ReturnsMatrix {
        ReturnsMatrix::from_rows(&[
            vec![0.012, -0.004],
            vec![-0.021, 0.008],
            vec![0.003, 0.001],
            vec![-0.007, -0.013],
            vec![0.015, 0.006],
            vec![-0.002, 0.004],
            vec![0.008, -0.009],
            vec![-0.016, 0.002],
        ])
        .unwrap()
    }

    fn engine(n_simulations: usize, horizon_days: usize) -> RiskEngine {
        RiskEngine::new(
            EngineConfig::builder()
                .n_simulations(n_simulations)
                .horizon_days(horizon_days)
                .build()
                .unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_report_aggregates_all_methods() {
        let weights = WeightVector::new(vec![0.6, 0.4]).unwrap();
        let report = engine(200, 10)
            .analyse(&sample_returns(), &weights, 1_000_000.0)
            .unwrap();

        assert_eq!(report.confidence_level, 0.95);
        assert_eq!(report.stats.portfolio_value, 1_000_000.0);
        assert_eq!(report.historical.portfolio_returns.len(), 8);
        assert!(report.expected_shortfall.es_value >= report.historical.var_value);
        assert_eq!(report.monte_carlo.final_values.len(), 200);
    }

    #[test]
    fn test_no_partial_report_on_mismatch() {
        let bad = WeightVector::new(vec![1.0, 2.0, 3.0]).unwrap();
        let result = engine(50, 5).analyse(&sample_returns(), &bad, 1_000.0);
        assert!(result.is_err());
    }

    #[test]
    fn test_report_serialises() {
        let weights = WeightVector::new(vec![0.6, 0.4]).unwrap();
        let report = engine(50, 5)
            .analyse(&sample_returns(), &weights, 1_000.0)
            .unwrap();
        let json = serde_json::to_string(&report).unwrap();
        let back: RiskReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
