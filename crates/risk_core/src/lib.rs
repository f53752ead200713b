//! # risk_core: Foundation for the Meridian Market-Risk Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! risk_core serves as the bottom layer of the 4-layer architecture, providing:
//! - Return-series and weight types (`types::returns`)
//! - Confidence-level type with open-interval validation (`types::confidence`)
//! - Error taxonomy shared by every layer (`types::error`)
//! - Moment estimators: mean, sample std, skewness, kurtosis (`math::moments`)
//! - Interpolated percentile kernel shared by all tail extractors (`math::percentile`)
//! - Covariance estimation, Cholesky factorisation, Ledoit-Wolf shrinkage (`math::covariance`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other risk_* crates, with minimal external
//! dependencies:
//! - thiserror: Structured error derivation
//!
//! ## Usage Examples
//!
//! ```rust
//! use risk_core::math::percentile::percentile;
//! use risk_core::types::{ConfidenceLevel, ReturnsMatrix, WeightVector};
//!
//! let returns = ReturnsMatrix::from_rows(&[
//!     vec![0.01, -0.02],
//!     vec![-0.005, 0.01],
//!     vec![0.002, 0.003],
//! ]).unwrap();
//! let weights = WeightVector::new(vec![0.6, 0.4]).unwrap();
//!
//! let series = returns.portfolio_returns(&weights).unwrap();
//! assert_eq!(series.len(), 3);
//!
//! let confidence = ConfidenceLevel::new(0.95).unwrap();
//! let tail = percentile(&series, confidence.lower_tail_percentile()).unwrap();
//! assert!(tail >= series.iter().cloned().fold(f64::INFINITY, f64::min));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
