//! Numeric kernels shared by the estimator and simulation layers.
//!
//! This module provides:
//! - `moments`: mean, sample standard deviation, bias-corrected skewness
//!   and excess kurtosis
//! - `percentile`: the single interpolated-percentile kernel used by
//!   historical VaR, the Expected Shortfall threshold and Monte Carlo VaR
//! - `covariance`: sample covariance, Cholesky factorisation, Ledoit-Wolf
//!   shrinkage
//!
//! Kernels return `Option` on degenerate input (empty series, too few
//! observations, non-positive-definite matrix); the calling layer maps
//! `None` to a stage-tagged [`RiskError`](crate::types::RiskError).

pub mod covariance;
pub mod moments;
pub mod percentile;

pub use covariance::{CholeskyFactor, CovarianceMatrix};
pub use moments::{excess_kurtosis, mean, sample_std, sample_variance, skewness};
pub use percentile::percentile;
