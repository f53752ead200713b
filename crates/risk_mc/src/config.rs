//! Monte Carlo simulation configuration.
//!
//! This module provides the configuration type and builder for the
//! simulation engine, validated at build time.

use risk_core::types::RiskError;

/// Maximum number of simulation paths allowed.
pub const MAX_SIMULATIONS: usize = 10_000_000;

/// Maximum time horizon in steps.
pub const MAX_HORIZON_DAYS: usize = 10_000;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters. Use
/// [`MonteCarloConfig::builder`] to construct instances; unset options
/// fall back to the conventional defaults (10 000 simulations, 252-day
/// horizon, seed 42).
///
/// # Examples
///
/// ```rust
/// use risk_mc::config::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_simulations(50_000)
///     .horizon_days(126)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_simulations(), 50_000);
/// assert_eq!(config.horizon_days(), 126);
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of simulation paths (S).
    n_simulations: usize,
    /// Time horizon in steps (T), including the initial row.
    horizon_days: usize,
    /// Seed for the deterministic random source.
    seed: u64,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn n_simulations(&self) -> usize {
        self.n_simulations
    }

    /// Returns the time horizon in steps.
    #[inline]
    pub fn horizon_days(&self) -> usize {
        self.horizon_days
    }

    /// Returns the random seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidConfig`] if:
    /// - `n_simulations` is 0 or greater than [`MAX_SIMULATIONS`]
    /// - `horizon_days` is 0 or greater than [`MAX_HORIZON_DAYS`]
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.n_simulations == 0 || self.n_simulations > MAX_SIMULATIONS {
            return Err(RiskError::config(
                "n_simulations",
                format!(
                    "{} outside [1, {}]",
                    self.n_simulations, MAX_SIMULATIONS
                ),
            ));
        }
        if self.horizon_days == 0 || self.horizon_days > MAX_HORIZON_DAYS {
            return Err(RiskError::config(
                "horizon_days",
                format!("{} outside [1, {}]", self.horizon_days, MAX_HORIZON_DAYS),
            ));
        }
        Ok(())
    }
}

impl Default for MonteCarloConfig {
    /// The conventional defaults: 10 000 simulations over a 252-day
    /// horizon, seed 42.
    fn default() -> Self {
        Self {
            n_simulations: 10_000,
            horizon_days: 252,
            seed: 42,
        }
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API with validation at build time; options left
/// unset keep their defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_simulations: Option<usize>,
    horizon_days: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths.
    #[inline]
    pub fn n_simulations(mut self, n_simulations: usize) -> Self {
        self.n_simulations = Some(n_simulations);
        self
    }

    /// Sets the time horizon in steps.
    #[inline]
    pub fn horizon_days(mut self, horizon_days: usize) -> Self {
        self.horizon_days = Some(horizon_days);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidConfig`] if any value is outside its
    /// valid range.
    pub fn build(self) -> Result<MonteCarloConfig, RiskError> {
        let defaults = MonteCarloConfig::default();
        let config = MonteCarloConfig {
            n_simulations: self.n_simulations.unwrap_or(defaults.n_simulations),
            horizon_days: self.horizon_days.unwrap_or(defaults.horizon_days),
            seed: self.seed.unwrap_or(defaults.seed),
        };
        config.validate()?;
        Ok(config)
    }
}
