//! Portfolio summary statistics.

use risk_core::math::moments;
use risk_core::types::{ReturnsMatrix, RiskError, Stage, WeightVector};
use tracing::debug;

use crate::records::StatsRecord;

/// Reduces a return matrix and weight vector into summary moments.
///
/// The trading-day convention used for Sharpe annualisation is injectable;
/// the default is the conventional 252.
///
/// # Examples
///
/// ```rust
/// use risk_core::types::{ReturnsMatrix, WeightVector};
/// use risk_metrics::stats::PortfolioStatistics;
///
/// let returns = ReturnsMatrix::from_rows(&[
///     vec![0.010], vec![-0.008], vec![0.004], vec![0.002], vec![-0.001],
/// ]).unwrap();
/// let weights = WeightVector::new(vec![1.0]).unwrap();
///
/// let stats = PortfolioStatistics::default()
///     .compute(&returns, &weights, 1_000_000.0)
///     .unwrap();
/// assert_eq!(stats.max_return, 0.010);
/// assert_eq!(stats.min_return, -0.008);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioStatistics {
    /// Trading days per year used for Sharpe annualisation.
    trading_days_per_year: u32,
}

impl PortfolioStatistics {
    /// Creates a statistics calculator with the given annualisation
    /// convention.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidConfig`] if `trading_days_per_year`
    /// is zero.
    pub fn new(trading_days_per_year: u32) -> Result<Self, RiskError> {
        if trading_days_per_year == 0 {
            return Err(RiskError::config(
                "trading_days_per_year",
                "must be positive, got 0",
            ));
        }
        Ok(Self {
            trading_days_per_year,
        })
    }

    /// Returns the annualisation convention.
    #[inline]
    pub fn trading_days_per_year(&self) -> u32 {
        self.trading_days_per_year
    }

    /// Computes summary moments of the weighted portfolio return series.
    ///
    /// # Errors
    ///
    /// - [`RiskError::InvalidInput`] (stage `stats`) on a weight-length
    ///   mismatch or non-positive portfolio value
    /// - [`RiskError::Numerical`] (stage `stats`) on zero volatility
    ///   (Sharpe undefined) or a series too short for the bias-corrected
    ///   higher moments (n < 4)
    pub fn compute(
        &self,
        returns: &ReturnsMatrix,
        weights: &WeightVector,
        portfolio_value: f64,
    ) -> Result<StatsRecord, RiskError> {
        if !portfolio_value.is_finite() || portfolio_value <= 0.0 {
            return Err(RiskError::input(
                Stage::Stats,
                format!("portfolio value must be positive, got {}", portfolio_value),
            ));
        }
        let series = returns.portfolio_returns(weights).ok_or_else(|| {
            RiskError::input(
                Stage::Stats,
                format!(
                    "weight length {} does not match asset count {}",
                    weights.len(),
                    returns.n_assets()
                ),
            )
        })?;
        if series.len() < 4 {
            return Err(RiskError::numerical(
                Stage::Stats,
                format!(
                    "bias-corrected moments need at least 4 observations, got {}",
                    series.len()
                ),
            ));
        }

        // Lengths are guaranteed by the checks above; the only remaining
        // degeneracy is a constant series.
        let mean = moments::mean(&series).unwrap_or_default();
        let volatility = moments::sample_std(&series).unwrap_or_default();
        if volatility == 0.0 {
            return Err(RiskError::numerical(
                Stage::Stats,
                "zero volatility, Sharpe ratio undefined",
            ));
        }
        let skewness = moments::skewness(&series).ok_or_else(|| {
            RiskError::numerical(Stage::Stats, "skewness undefined for constant series")
        })?;
        let kurtosis = moments::excess_kurtosis(&series).ok_or_else(|| {
            RiskError::numerical(Stage::Stats, "kurtosis undefined for constant series")
        })?;

        let sharpe_ratio = mean / volatility * (self.trading_days_per_year as f64).sqrt();
        let min_return = series.iter().cloned().fold(f64::INFINITY, f64::min);
        let max_return = series.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        debug!(
            observations = series.len(),
            mean, volatility, sharpe_ratio, "portfolio statistics computed"
        );

        Ok(StatsRecord {
            portfolio_value,
            mean_daily_return: mean,
            volatility,
            sharpe_ratio,
            skewness,
            kurtosis,
            min_return,
            max_return,
        })
    }
}

impl Default for PortfolioStatistics {
    /// The conventional 252 trading days.
    fn default() -> Self {
        Self {
            trading_days_per_year: 252,
        }
    }
}
