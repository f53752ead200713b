//! # risk_metrics: Statistical Risk Estimators
//!
//! ## Layer 2 (Estimators) Role
//!
//! risk_metrics reduces a historical return matrix and weight vector into
//! per-method risk records:
//!
//! - `stats`: summary moments and annualised Sharpe ratio
//! - `var`: historical-simulation VaR, parametric (variance-covariance)
//!   VaR, and Expected Shortfall
//! - `records`: the typed, serialisable result records consumed by the
//!   downstream reporting collaborators
//!
//! Every operation is a pure function of its inputs: the portfolio return
//! series is recomputed per call rather than cached between methods, so
//! each record stands alone.
//!
//! ## Usage Example
//!
//! ```rust
//! use risk_core::types::{ConfidenceLevel, ReturnsMatrix, WeightVector};
//! use risk_metrics::var::VarCalculator;
//!
//! let returns = ReturnsMatrix::from_rows(&[
//!     vec![0.012, -0.004],
//!     vec![-0.021, 0.008],
//!     vec![0.003, 0.001],
//!     vec![-0.007, -0.013],
//!     vec![0.015, 0.006],
//! ]).unwrap();
//! let weights = WeightVector::new(vec![0.6, 0.4]).unwrap();
//!
//! let calculator = VarCalculator::new(ConfidenceLevel::default());
//! let historical = calculator.historical(&returns, &weights, 1_000_000.0).unwrap();
//! let es = calculator
//!     .expected_shortfall(&historical.portfolio_returns, 1_000_000.0)
//!     .unwrap();
//! assert!(es.es_value >= historical.var_value);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod records;
pub mod stats;
pub mod var;

pub use records::{
    ExpectedShortfallRecord, HistoricalVarRecord, ParametricVarRecord, StatsRecord,
};
pub use stats::PortfolioStatistics;
pub use var::VarCalculator;
