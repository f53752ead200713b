//! Cross-asset correlated path generation.
//!
//! The correlated model simulates every asset individually: independent
//! standard normal draws are transformed through the lower-triangular
//! Cholesky factor of the asset covariance matrix, each asset steps
//! multiplicatively on (its historical mean return + correlated shock),
//! and the portfolio path is the per-step sum across assets.
//!
//! Factorisation is the one recoverable failure in the engine: a sample
//! covariance that is not positive definite (more assets than effective
//! observations, duplicated columns) is retried once through the
//! Ledoit-Wolf shrinkage estimator before the failure is surfaced.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::warn;

use risk_core::math::covariance::{CholeskyFactor, CovarianceMatrix};
use risk_core::types::{ReturnsMatrix, RiskError, Stage};

use crate::paths::SimulationPaths;
use crate::rng::RiskRng;

/// T x S x N tensor of per-asset simulated values.
///
/// Stored simulation-major, `values[(path * n_steps + step) * n_assets
/// + asset]`, so each parallel worker writes one contiguous block.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrelatedPaths {
    /// Tensor values, simulation-major.
    values: Vec<f64>,
    /// Number of time steps (T), including the initial row.
    n_steps: usize,
    /// Number of simulations (S).
    n_paths: usize,
    /// Number of assets (N).
    n_assets: usize,
}

impl CorrelatedPaths {
    /// Returns the number of time steps, including the initial row.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Returns the number of simulations.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of assets.
    #[inline]
    pub fn n_assets(&self) -> usize {
        self.n_assets
    }

    /// Returns one asset's value in one simulation at one step.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of range.
    #[inline]
    pub fn value(&self, step: usize, path: usize, asset: usize) -> f64 {
        assert!(step < self.n_steps, "step index out of range");
        assert!(path < self.n_paths, "path index out of range");
        assert!(asset < self.n_assets, "asset index out of range");
        self.values[(path * self.n_steps + step) * self.n_assets + asset]
    }

    /// Returns the asset-value row for one simulation at one step.
    #[inline]
    pub fn asset_row(&self, step: usize, path: usize) -> &[f64] {
        assert!(step < self.n_steps, "step index out of range");
        assert!(path < self.n_paths, "path index out of range");
        let start = (path * self.n_steps + step) * self.n_assets;
        &self.values[start..start + self.n_assets]
    }
}

/// Factorises the sample covariance of `returns`, retrying once through
/// the Ledoit-Wolf shrinkage estimator when the sample matrix is not
/// positive definite.
pub(crate) fn factorise_with_fallback(
    returns: &ReturnsMatrix,
) -> Result<CholeskyFactor, RiskError> {
    let sample = CovarianceMatrix::sample(returns);
    if let Some(factor) = sample.cholesky() {
        return Ok(factor);
    }
    warn!(
        n_assets = returns.n_assets(),
        n_periods = returns.n_periods(),
        "sample covariance not positive definite, retrying with Ledoit-Wolf shrinkage"
    );
    CovarianceMatrix::ledoit_wolf(returns)
        .cholesky()
        .ok_or_else(|| {
            RiskError::numerical(
                Stage::Simulation,
                "covariance factorisation failed after shrinkage retry",
            )
        })
}

/// Generates correlated per-asset paths and their portfolio aggregation.
///
/// Each asset starts at its initial allocation; step t of asset i in one
/// simulation is:
///
/// ```text
/// value[t][i] = value[t-1][i] * (1 + mean[i] + w[t][i]),   w = L * z
/// ```
///
/// with `z` a vector of independent standard normals drawn fresh per
/// step. Simulations are independent and generated in parallel, each
/// consuming the sub-stream derived from `(seed, path)`; calibration
/// inputs (`mean_vector`, `factor`, `initial_allocations`) are shared
/// immutably across workers.
///
/// The returned [`SimulationPaths`] holds the per-step sum across assets
/// for every simulation.
pub(crate) fn generate_correlated_paths(
    n_paths: usize,
    n_steps: usize,
    seed: u64,
    mean_vector: &[f64],
    factor: &CholeskyFactor,
    initial_allocations: &[f64],
    initial_value: f64,
) -> (SimulationPaths, CorrelatedPaths) {
    let n_assets = mean_vector.len();
    debug_assert_eq!(factor.dim(), n_assets);
    debug_assert_eq!(initial_allocations.len(), n_assets);

    let master = RiskRng::from_seed(seed);
    let per_simulation: Vec<(Vec<f64>, Vec<f64>)> = (0..n_paths)
        .into_par_iter()
        .map(|path| {
            let mut rng = master.substream(path as u64);
            let mut block = Vec::with_capacity(n_steps * n_assets);
            let mut portfolio = Vec::with_capacity(n_steps);

            let mut assets = initial_allocations.to_vec();
            block.extend_from_slice(&assets);
            portfolio.push(assets.iter().sum());

            let mut z = vec![0.0; n_assets];
            let mut shocks = vec![0.0; n_assets];
            for _ in 1..n_steps {
                rng.fill_standard_normal(&mut z);
                factor.correlate(&z, &mut shocks);
                for (value, (mean, shock)) in
                    assets.iter_mut().zip(mean_vector.iter().zip(&shocks))
                {
                    *value *= 1.0 + mean + shock;
                }
                block.extend_from_slice(&assets);
                portfolio.push(assets.iter().sum());
            }
            (block, portfolio)
        })
        .collect();

    let mut values = Vec::with_capacity(n_paths * n_steps * n_assets);
    let mut columns = Vec::with_capacity(n_paths);
    for (block, portfolio) in per_simulation {
        values.extend_from_slice(&block);
        columns.push(portfolio);
    }

    let tensor = CorrelatedPaths {
        values,
        n_steps,
        n_paths,
        n_assets,
    };
    (SimulationPaths::from_columns(columns, initial_value), tensor)
}
