//! Value-at-Risk estimators and Expected Shortfall.
//!
//! All three operations share the interpolated percentile kernel from
//! `risk_core::math::percentile`. Expected Shortfall recomputes its
//! threshold from the series (so it remains callable standalone) but goes
//! through the identical routine used by the historical method, which is
//! what keeps ES >= VaR exact rather than approximate.

use risk_core::math::{moments, percentile::percentile};
use risk_core::types::{ConfidenceLevel, ReturnsMatrix, RiskError, Stage, WeightVector};
use statrs::distribution::{ContinuousCDF, Normal};
use tracing::debug;

use crate::records::{ExpectedShortfallRecord, HistoricalVarRecord, ParametricVarRecord};

/// Historical and parametric VaR plus Expected Shortfall at one
/// confidence level.
///
/// # Examples
///
/// ```rust
/// use risk_core::types::{ConfidenceLevel, ReturnsMatrix, WeightVector};
/// use risk_metrics::var::VarCalculator;
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
/// let calculator = VarCalculator::new(ConfidenceLevel::new(0.95).unwrap());
/// let record = calculator.historical(&returns, &weights, 1_000_000.0).unwrap();
/// assert!(record.var_fraction > 0.0);
/// assert_eq!(record.var_value, record.var_fraction * 1_000_000.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VarCalculator {
    confidence: ConfidenceLevel,
}

impl VarCalculator {
    /// Creates a calculator for the given confidence level.
    pub fn new(confidence: ConfidenceLevel) -> Self {
        Self { confidence }
    }

    /// Returns the configured confidence level.
    #[inline]
    pub fn confidence(&self) -> ConfidenceLevel {
        self.confidence
    }

    /// Historical-simulation VaR: the interpolated lower-tail percentile
    /// of the empirical portfolio return distribution, with no
    /// distributional assumption.
    ///
    /// The returned record carries the portfolio return series so
    /// [`expected_shortfall`](Self::expected_shortfall) can reuse it
    /// without recomputing the dot product.
    ///
    /// # Errors
    ///
    /// [`RiskError::InvalidInput`] (stage `historical`) on weight-length
    /// mismatch or non-positive portfolio value.
    pub fn historical(
        &self,
        returns: &ReturnsMatrix,
        weights: &WeightVector,
        portfolio_value: f64,
    ) -> Result<HistoricalVarRecord, RiskError> {
        check_portfolio_value(portfolio_value, Stage::Historical)?;
        let series = weighted_series(returns, weights, Stage::Historical)?;

        let tail = percentile(&series, self.confidence.lower_tail_percentile())
            .ok_or_else(|| RiskError::input(Stage::Historical, "empty return series"))?;
        let var_fraction = -tail;

        debug!(
            confidence = self.confidence.value(),
            var_fraction, "historical VaR extracted"
        );

        Ok(HistoricalVarRecord {
            var_fraction,
            var_value: var_fraction * portfolio_value,
            portfolio_returns: series,
        })
    }

    /// Parametric (variance-covariance) VaR under the assumption that the
    /// portfolio return is normally distributed:
    ///
    /// ```text
    /// VaR = -(mean - z * std),   z = Phi^-1(confidence)
    /// ```
    ///
    /// # Errors
    ///
    /// - [`RiskError::InvalidInput`] (stage `parametric`) on weight-length
    ///   mismatch or non-positive portfolio value
    /// - [`RiskError::Numerical`] (stage `parametric`) on zero volatility
    pub fn parametric(
        &self,
        returns: &ReturnsMatrix,
        weights: &WeightVector,
        portfolio_value: f64,
    ) -> Result<ParametricVarRecord, RiskError> {
        check_portfolio_value(portfolio_value, Stage::Parametric)?;
        let series = weighted_series(returns, weights, Stage::Parametric)?;

        let mean = moments::mean(&series)
            .ok_or_else(|| RiskError::input(Stage::Parametric, "empty return series"))?;
        let std = moments::sample_std(&series).ok_or_else(|| {
            RiskError::numerical(Stage::Parametric, "need at least 2 observations")
        })?;
        if std == 0.0 {
            return Err(RiskError::numerical(
                Stage::Parametric,
                "zero volatility, normal quantile degenerate",
            ));
        }

        let standard_normal = Normal::new(0.0, 1.0)
            .map_err(|e| RiskError::numerical(Stage::Parametric, e.to_string()))?;
        let z = standard_normal.inverse_cdf(self.confidence.value());
        let var_fraction = -(mean - z * std);

        Ok(ParametricVarRecord {
            var_fraction,
            var_value: var_fraction * portfolio_value,
            mean,
            std,
        })
    }

    /// Expected Shortfall: the mean of the returns at or below the VaR
    /// threshold, as a positive loss magnitude.
    ///
    /// The threshold is recomputed here through the same percentile kernel
    /// the historical method uses, so the two never diverge. When the tail
    /// set is empty the ES magnitude falls back to the threshold itself,
    /// a deliberate policy for small samples at extreme confidence, not a
    /// failure.
    ///
    /// # Errors
    ///
    /// [`RiskError::InvalidInput`] (stage `expected-shortfall`) on an empty
    /// series or non-positive portfolio value.
    pub fn expected_shortfall(
        &self,
        portfolio_returns: &[f64],
        portfolio_value: f64,
    ) -> Result<ExpectedShortfallRecord, RiskError> {
        check_portfolio_value(portfolio_value, Stage::ExpectedShortfall)?;

        let tail_threshold = percentile(portfolio_returns, self.confidence.lower_tail_percentile())
            .ok_or_else(|| {
                RiskError::input(Stage::ExpectedShortfall, "empty return series")
            })?;
        let var_magnitude = -tail_threshold;

        let tail_losses: Vec<f64> = portfolio_returns
            .iter()
            .copied()
            .filter(|r| *r <= tail_threshold)
            .collect();

        let es_fraction = match moments::mean(&tail_losses) {
            Some(tail_mean) => -tail_mean,
            None => var_magnitude,
        };

        Ok(ExpectedShortfallRecord {
            es_fraction,
            es_value: es_fraction * portfolio_value,
            tail_losses,
        })
    }
}

/// Rejects non-positive or non-finite portfolio values.
fn check_portfolio_value(portfolio_value: f64, stage: Stage) -> Result<(), RiskError> {
    if !portfolio_value.is_finite() || portfolio_value <= 0.0 {
        return Err(RiskError::input(
            stage,
            format!("portfolio value must be positive, got {}", portfolio_value),
        ));
    }
    Ok(())
}

/// Weighted row reduction with a stage-tagged mismatch error.
fn weighted_series(
    returns: &ReturnsMatrix,
    weights: &WeightVector,
    stage: Stage,
) -> Result<Vec<f64>, RiskError> {
    returns.portfolio_returns(weights).ok_or_else(|| {
        RiskError::input(
            stage,
            format!(
                "weight length {} does not match asset count {}",
                weights.len(),
                returns.n_assets()
            ),
        )
    })
}
