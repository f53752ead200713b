//! Error taxonomy for the risk engine.
//!
//! This module provides:
//! - `RiskError`: the single error type propagated by every layer
//! - `Stage`: the tag identifying which computation stage failed
//!
//! Propagation policy: every error surfaces to the caller with its stage tag
//! and the offending value. The only locally recovered failure in the engine
//! is the covariance factorisation retry in `risk_mc`; everything else is
//! fatal for the call. There is no partial-result mode.

use std::fmt;
use thiserror::Error;

/// Computation stage in which an error occurred.
///
/// `Input` covers construction-time validation that happens before any
/// method-specific stage runs (matrix shape, finiteness checks).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Construction-time input validation.
    Input,
    /// Portfolio statistics computation.
    Stats,
    /// Historical-simulation VaR.
    Historical,
    /// Parametric (variance-covariance) VaR.
    Parametric,
    /// Expected Shortfall.
    ExpectedShortfall,
    /// Monte Carlo simulation.
    Simulation,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Input => "input",
            Stage::Stats => "stats",
            Stage::Historical => "historical",
            Stage::Parametric => "parametric",
            Stage::ExpectedShortfall => "expected-shortfall",
            Stage::Simulation => "simulation",
        };
        write!(f, "{}", name)
    }
}

/// Categorised risk-engine errors.
///
/// # Variants
/// - `InvalidInput`: empty or malformed return matrix, weight-length
///   mismatch, non-positive portfolio value
/// - `InvalidConfig`: configuration value outside its valid range
/// - `Numerical`: degenerate computation (zero volatility, factorisation
///   failure after the shrinkage retry)
///
/// # Examples
/// ```
/// use risk_core::types::{RiskError, Stage};
///
/// let err = RiskError::numerical(Stage::Parametric, "zero volatility");
/// assert_eq!(
///     err.to_string(),
///     "numerical failure (parametric): zero volatility"
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Error)]
pub enum RiskError {
    /// Invalid input data for the tagged stage.
    #[error("invalid input ({stage}): {message}")]
    InvalidInput {
        /// Stage in which the input was rejected.
        stage: Stage,
        /// Description of the offending value.
        message: String,
    },

    /// Configuration value outside its valid range.
    #[error("invalid configuration: {name} {value}")]
    InvalidConfig {
        /// Name of the configuration option.
        name: &'static str,
        /// Description of the offending value.
        value: String,
    },

    /// Degenerate numerical computation in the tagged stage.
    #[error("numerical failure ({stage}): {message}")]
    Numerical {
        /// Stage in which the computation degenerated.
        stage: Stage,
        /// Description of the failure.
        message: String,
    },
}

impl RiskError {
    /// Creates an `InvalidInput` error for the given stage.
    pub fn input(stage: Stage, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            stage,
            message: message.into(),
        }
    }

    /// Creates an `InvalidConfig` error for the named option.
    pub fn config(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidConfig {
            name,
            value: value.into(),
        }
    }

    /// Creates a `Numerical` error for the given stage.
    pub fn numerical(stage: Stage, message: impl Into<String>) -> Self {
        Self::Numerical {
            stage,
            message: message.into(),
        }
    }

    /// Returns the stage tag, if the variant carries one.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            Self::InvalidInput { stage, .. } | Self::Numerical { stage, .. } => Some(*stage),
            Self::InvalidConfig { .. } => None,
        }
    }
}
