//! Typed result records, one per estimation method.
//!
//! Each record is a complete, internally consistent snapshot of one
//! method's output: either the whole record is produced or the method
//! fails. Records serialise with serde so the reporting and visualisation
//! collaborators can consume them without reaching back into the engine.

use serde::{Deserialize, Serialize};

/// Summary moments of the portfolio return series.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    /// Base notional used for monetary scaling.
    pub portfolio_value: f64,
    /// Mean daily portfolio return.
    pub mean_daily_return: f64,
    /// Sample standard deviation of daily returns.
    pub volatility: f64,
    /// Annualised Sharpe ratio, `(mean / std) * sqrt(trading days)`.
    pub sharpe_ratio: f64,
    /// Adjusted Fisher-Pearson sample skewness.
    pub skewness: f64,
    /// Bias-corrected sample excess kurtosis.
    pub kurtosis: f64,
    /// Worst daily return in the sample.
    pub min_return: f64,
    /// Best daily return in the sample.
    pub max_return: f64,
}

/// Historical-simulation VaR.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoricalVarRecord {
    /// Loss magnitude as a fraction of portfolio value.
    pub var_fraction: f64,
    /// Loss magnitude in currency.
    pub var_value: f64,
    /// The portfolio return series the percentile was taken from; reused
    /// by Expected Shortfall.
    pub portfolio_returns: Vec<f64>,
}

/// Parametric (variance-covariance) VaR under a normal assumption.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParametricVarRecord {
    /// Loss magnitude as a fraction of portfolio value.
    pub var_fraction: f64,
    /// Loss magnitude in currency.
    pub var_value: f64,
    /// Calibrated mean of the portfolio return series.
    pub mean: f64,
    /// Calibrated sample standard deviation of the series.
    pub std: f64,
}

/// Expected Shortfall (CVaR): mean loss conditional on breaching VaR.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExpectedShortfallRecord {
    /// Tail-loss magnitude as a fraction of portfolio value.
    pub es_fraction: f64,
    /// Tail-loss magnitude in currency.
    pub es_value: f64,
    /// The returns at or below the VaR threshold that the mean was taken
    /// over; empty when the fallback to the threshold itself applied.
    pub tail_losses: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_serialise_round_trip() {
        let record = HistoricalVarRecord {
            var_fraction: 0.021,
            var_value: 21_000.0,
            portfolio_returns: vec![0.01, -0.02, 0.005],
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: HistoricalVarRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_stats_record_field_names() {
        let record = StatsRecord {
            portfolio_value: 1_000_000.0,
            mean_daily_return: 0.0008,
            volatility: 0.015,
            sharpe_ratio: 0.85,
            skewness: -0.2,
            kurtosis: 1.1,
            min_return: -0.06,
            max_return: 0.05,
        };
        let json = serde_json::to_string(&record).unwrap();
        for field in [
            "portfolio_value",
            "mean_daily_return",
            "volatility",
            "sharpe_ratio",
            "skewness",
            "kurtosis",
            "min_return",
            "max_return",
        ] {
            assert!(json.contains(field), "missing field {}", field);
        }
    }
}
