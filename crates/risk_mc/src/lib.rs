//! # risk_mc: Monte Carlo Simulation Engine
//!
//! ## Layer 3 (Simulation) Role
//!
//! risk_mc calibrates drift and volatility from historical data and
//! generates simulated future portfolio value paths:
//!
//! - `config`: builder-validated simulation parameters
//! - `rng`: seeded random source with per-path sub-streams
//! - `paths`: path storage and single-factor generation
//! - `correlated`: cross-asset correlated generation via Cholesky
//!   factorisation with a Ledoit-Wolf shrinkage retry
//! - `simulator`: calibration and orchestration
//! - `var`: VaR extraction from the simulated terminal distribution
//!
//! ## Determinism
//!
//! A fixed seed reproduces bit-identical output across runs and across
//! worker counts: every simulation path draws from an independently
//! derived sub-stream, so rayon scheduling never changes the sequence a
//! path consumes. Calibration (moments, covariance, factorisation) is
//! completed single-threaded before path generation begins; the path
//! loop shares it immutably.
//!
//! ## Usage Example
//!
//! ```rust
//! use risk_core::types::{ConfidenceLevel, ReturnsMatrix, WeightVector};
//! use risk_mc::{monte_carlo_var, MonteCarloConfig, MonteCarloSimulator};
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
//! let config = MonteCarloConfig::builder()
//!     .n_simulations(512)
//!     .horizon_days(21)
//!     .build()
//!     .unwrap();
//! let simulator = MonteCarloSimulator::new(config);
//!
//! let paths = simulator
//!     .simulate_single_factor(&returns, &weights, 1_000_000.0)
//!     .unwrap();
//! let record = monte_carlo_var(paths, ConfidenceLevel::default()).unwrap();
//! assert_eq!(record.final_values.len(), 512);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod correlated;
pub mod paths;
pub mod rng;
pub mod simulator;
pub mod var;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder};
pub use correlated::CorrelatedPaths;
pub use paths::SimulationPaths;
pub use rng::RiskRng;
pub use simulator::MonteCarloSimulator;
pub use var::{monte_carlo_var, MonteCarloVarRecord};
