//! # risk_engine: Aggregation Facade
//!
//! ## Layer 4 (Application) Role
//!
//! risk_engine runs every estimation method over one portfolio and
//! aggregates the per-method records into a single [`RiskReport`]:
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            risk_engine (L4)             │
//! │  EngineConfig, RiskEngine, RiskReport   │
//! └─────────────────────────────────────────┘
//!          ↓                    ↓
//! ┌──────────────────┐ ┌──────────────────┐
//! │ risk_metrics (L2)│ │   risk_mc (L3)   │
//! │ stats, VaR, ES   │ │ path simulation  │
//! └──────────────────┘ └──────────────────┘
//!          ↓                    ↓
//! ┌─────────────────────────────────────────┐
//! │             risk_core (L1)              │
//! │  types, error taxonomy, numeric kernels │
//! └─────────────────────────────────────────┘
//! ```
//!
//! The report is what the out-of-process collaborators (reporting,
//! visualisation) consume; it serialises with serde and carries no
//! references back into the engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod report;

pub use config::{EngineConfig, EngineConfigBuilder};
pub use report::{RiskEngine, RiskReport};
