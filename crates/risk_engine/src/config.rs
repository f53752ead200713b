//! Engine configuration covering the full option surface.

use risk_core::types::{ConfidenceLevel, RiskError};
use risk_mc::MonteCarloConfig;

/// Validated configuration for a full risk analysis.
///
/// Collects every recognised option (confidence level, simulation count,
/// time horizon, random seed, trading-day convention) with the
/// conventional defaults (0.95 / 10 000 / 252 / 42 / 252).
///
/// # Examples
///
/// ```rust
/// use risk_engine::config::EngineConfig;
///
/// let config = EngineConfig::builder()
///     .confidence_level(0.99)
///     .n_simulations(50_000)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.confidence().value(), 0.99);
/// assert_eq!(config.monte_carlo().n_simulations(), 50_000);
/// assert_eq!(config.trading_days_per_year(), 252);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EngineConfig {
    confidence: ConfidenceLevel,
    monte_carlo: MonteCarloConfig,
    trading_days_per_year: u32,
}

impl EngineConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Returns the confidence level.
    #[inline]
    pub fn confidence(&self) -> ConfidenceLevel {
        self.confidence
    }

    /// Returns the Monte Carlo configuration.
    #[inline]
    pub fn monte_carlo(&self) -> &MonteCarloConfig {
        &self.monte_carlo
    }

    /// Returns the trading-day convention used for annualisation.
    #[inline]
    pub fn trading_days_per_year(&self) -> u32 {
        self.trading_days_per_year
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            confidence: ConfidenceLevel::default(),
            monte_carlo: MonteCarloConfig::default(),
            trading_days_per_year: 252,
        }
    }
}

/// Builder for [`EngineConfig`].
///
/// Options left unset keep their defaults; everything is validated at
/// build time.
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineConfigBuilder {
    confidence_level: Option<f64>,
    n_simulations: Option<usize>,
    horizon_days: Option<usize>,
    seed: Option<u64>,
    trading_days_per_year: Option<u32>,
}

impl EngineConfigBuilder {
    /// Sets the confidence level, strictly inside (0, 1).
    #[inline]
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = Some(level);
        self
    }

    /// Sets the number of Monte Carlo simulations.
    #[inline]
    pub fn n_simulations(mut self, n_simulations: usize) -> Self {
        self.n_simulations = Some(n_simulations);
        self
    }

    /// Sets the simulation horizon in steps.
    #[inline]
    pub fn horizon_days(mut self, horizon_days: usize) -> Self {
        self.horizon_days = Some(horizon_days);
        self
    }

    /// Sets the random seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the trading-day convention for Sharpe annualisation.
    #[inline]
    pub fn trading_days_per_year(mut self, days: u32) -> Self {
        self.trading_days_per_year = Some(days);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidConfig`] if any option is outside its
    /// valid range.
    pub fn build(self) -> Result<EngineConfig, RiskError> {
        let defaults = EngineConfig::default();

        let confidence = match self.confidence_level {
            Some(level) => ConfidenceLevel::new(level)?,
            None => defaults.confidence,
        };

        let mut monte_carlo = MonteCarloConfig::builder();
        if let Some(n) = self.n_simulations {
            monte_carlo = monte_carlo.n_simulations(n);
        }
        if let Some(h) = self.horizon_days {
            monte_carlo = monte_carlo.horizon_days(h);
        }
        if let Some(s) = self.seed {
            monte_carlo = monte_carlo.seed(s);
        }
        let monte_carlo = monte_carlo.build()?;

        let trading_days_per_year = self
            .trading_days_per_year
            .unwrap_or(defaults.trading_days_per_year);
        if trading_days_per_year == 0 {
            return Err(RiskError::config(
                "trading_days_per_year",
                "must be positive, got 0",
            ));
        }

        Ok(EngineConfig {
            confidence,
            monte_carlo,
            trading_days_per_year,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::builder().build().unwrap();
        assert_eq!(config.confidence().value(), 0.95);
        assert_eq!(config.monte_carlo().n_simulations(), 10_000);
        assert_eq!(config.monte_carlo().horizon_days(), 252);
        assert_eq!(config.monte_carlo().seed(), 42);
        assert_eq!(config.trading_days_per_year(), 252);
    }

    #[test]
    fn test_invalid_confidence_rejected() {
        for level in [0.0, 1.0, -1.0] {
            assert!(matches!(
                EngineConfig::builder().confidence_level(level).build(),
                Err(RiskError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn test_invalid_simulation_count_rejected() {
        assert!(EngineConfig::builder().n_simulations(0).build().is_err());
        assert!(EngineConfig::builder().horizon_days(0).build().is_err());
        assert!(EngineConfig::builder()
            .trading_days_per_year(0)
            .build()
            .is_err());
    }
}
