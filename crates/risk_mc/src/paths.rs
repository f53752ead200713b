//! Portfolio value path storage and single-factor path generation.
//!
//! # Memory Layout
//!
//! Paths are stored row-major by time step: `values[step * n_paths + path]`.
//! Step 0 holds the shared initial portfolio value for every path, so a
//! horizon of T steps produces T rows including the initial one. The
//! terminal row is then a contiguous slice, which is what the VaR
//! extractor consumes.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::rng::RiskRng;

/// T x S matrix of simulated portfolio values sharing one initial value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationPaths {
    /// Path values, row-major by step.
    values: Vec<f64>,
    /// Number of time steps (T), including the initial row.
    n_steps: usize,
    /// Number of paths (S).
    n_paths: usize,
    /// Common initial portfolio value.
    initial_value: f64,
}

impl SimulationPaths {
    /// Assembles a path set from per-path columns of equal length.
    ///
    /// # Panics
    ///
    /// Panics if `columns` is empty or the columns are ragged.
    pub(crate) fn from_columns(columns: Vec<Vec<f64>>, initial_value: f64) -> Self {
        let n_paths = columns.len();
        assert!(n_paths > 0, "no path columns");
        let n_steps = columns[0].len();
        let mut values = vec![0.0; n_steps * n_paths];
        for (path, column) in columns.iter().enumerate() {
            assert_eq!(column.len(), n_steps, "ragged path column");
            for (step, value) in column.iter().enumerate() {
                values[step * n_paths + path] = *value;
            }
        }
        Self {
            values,
            n_steps,
            n_paths,
            initial_value,
        }
    }

    /// Returns the number of time steps, including the initial row.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the common initial portfolio value.
    #[inline]
    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Returns the value of one path at one step.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn value(&self, step: usize, path: usize) -> f64 {
        assert!(path < self.n_paths, "path index out of range");
        self.values[step * self.n_paths + path]
    }

    /// Returns all path values at one step.
    ///
    /// # Panics
    ///
    /// Panics if `step >= n_steps()`.
    #[inline]
    pub fn step_row(&self, step: usize) -> &[f64] {
        let start = step * self.n_paths;
        &self.values[start..start + self.n_paths]
    }

    /// Returns the terminal (last-step) value distribution.
    #[inline]
    pub fn terminal(&self) -> &[f64] {
        self.step_row(self.n_steps - 1)
    }
}

/// Generates single-factor portfolio value paths.
///
/// Every path starts at `initial_value`; each subsequent step draws a
/// shock from `N(drift, volatility)` and updates multiplicatively:
///
/// ```text
/// value[t] = value[t-1] * (1 + shock)
/// ```
///
/// The update is arithmetic, not log-space: simulated values can cross
/// zero over long horizons at high volatility, and no floor is applied.
/// This mirrors the calibration convention (drift and volatility are the
/// plain mean and standard deviation of the historical series) and is
/// preserved deliberately for compatibility with the established results.
///
/// With `n_steps <= 1` no stepping occurs and the output is the single
/// initial row.
///
/// Paths are generated in parallel; path `p` consumes the sub-stream
/// derived from `(seed, p)`, so output is identical for a fixed seed
/// under any worker count.
pub fn generate_single_factor_paths(
    n_paths: usize,
    n_steps: usize,
    seed: u64,
    drift: f64,
    volatility: f64,
    initial_value: f64,
) -> SimulationPaths {
    let master = RiskRng::from_seed(seed);
    let columns: Vec<Vec<f64>> = (0..n_paths)
        .into_par_iter()
        .map(|path| {
            let mut rng = master.substream(path as u64);
            let mut column = Vec::with_capacity(n_steps.max(1));
            column.push(initial_value);
            let mut current = initial_value;
            for _ in 1..n_steps {
                let shock = rng.normal(drift, volatility);
                current *= 1.0 + shock;
                column.push(current);
            }
            column
        })
        .collect();
    SimulationPaths::from_columns(columns, initial_value)
}
