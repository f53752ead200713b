//! Covariance estimation and factorisation for correlated path generation.
//!
//! ## Mathematical Background
//!
//! Given `n` independent standard normal draws `Z = [Z1, ..., Zn]`,
//! correlated shocks are obtained as:
//!
//! ```text
//! W = L * Z
//! ```
//!
//! where `L` is the lower-triangular Cholesky factor of the covariance
//! matrix `C`:
//!
//! ```text
//! C = L * L^T
//! ```
//!
//! A sample covariance estimated from fewer observations than assets is
//! rank deficient and has no Cholesky factor; the Ledoit-Wolf shrinkage
//! estimator regularises it towards a scaled identity so the factorisation
//! can be retried.

use crate::types::ReturnsMatrix;

/// Symmetric covariance matrix, row-major.
///
/// # Examples
///
/// ```rust
/// use risk_core::math::covariance::CovarianceMatrix;
/// use risk_core::types::ReturnsMatrix;
///
/// let returns = ReturnsMatrix::from_rows(&[
///     vec![0.01, 0.02],
///     vec![-0.01, 0.00],
///     vec![0.02, 0.01],
/// ]).unwrap();
///
/// let cov = CovarianceMatrix::sample(&returns);
/// assert_eq!(cov.dim(), 2);
/// // symmetric by construction
/// assert_eq!(cov.get(0, 1), cov.get(1, 0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CovarianceMatrix {
    /// Matrix elements in row-major order.
    data: Vec<f64>,
    /// Matrix dimension (n x n).
    dim: usize,
}

impl CovarianceMatrix {
    /// Wraps a caller-supplied symmetric matrix.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != dim * dim`.
    pub fn from_raw(data: Vec<f64>, dim: usize) -> Self {
        assert_eq!(data.len(), dim * dim, "matrix buffer/dimension mismatch");
        Self { data, dim }
    }

    /// Unbiased sample covariance (n-1 divisor) of the asset columns.
    pub fn sample(returns: &ReturnsMatrix) -> Self {
        let n = returns.n_assets();
        let t = returns.n_periods();
        let means = returns.mean_vector();
        let mut data = vec![0.0; n * n];
        let norm = 1.0 / (t - 1) as f64;

        for i in 0..n {
            for j in i..n {
                let mut acc = 0.0;
                for step in 0..t {
                    let row = returns.row(step);
                    acc += (row[i] - means[i]) * (row[j] - means[j]);
                }
                let value = acc * norm;
                data[i * n + j] = value;
                data[j * n + i] = value;
            }
        }
        Self { data, dim: n }
    }

    /// Ledoit-Wolf shrinkage estimate towards a scaled identity target.
    ///
    /// Follows Ledoit & Wolf (2004), "A well-conditioned estimator for
    /// large-dimensional covariance matrices": the empirical covariance
    /// (n divisor) is blended with `mu * I`, `mu = trace(S)/n`, using the
    /// analytically optimal shrinkage intensity. The result is positive
    /// definite whenever any asset shows variance, which is what makes it
    /// a usable fallback when the raw sample covariance fails to factor.
    pub fn ledoit_wolf(returns: &ReturnsMatrix) -> Self {
        let n = returns.n_assets();
        let t = returns.n_periods();
        let means = returns.mean_vector();

        // Centered observations, row-major.
        let mut centered = vec![0.0; t * n];
        for step in 0..t {
            let row = returns.row(step);
            for i in 0..n {
                centered[step * n + i] = row[i] - means[i];
            }
        }

        // Empirical covariance with the n divisor.
        let mut s = vec![0.0; n * n];
        let inv_t = 1.0 / t as f64;
        for i in 0..n {
            for j in i..n {
                let mut acc = 0.0;
                for step in 0..t {
                    acc += centered[step * n + i] * centered[step * n + j];
                }
                let value = acc * inv_t;
                s[i * n + j] = value;
                s[j * n + i] = value;
            }
        }

        // Shrinkage target mu * I and squared distance d2 = ||S - mu I||^2 / n.
        let mu = (0..n).map(|i| s[i * n + i]).sum::<f64>() / n as f64;
        let mut d2 = 0.0;
        for i in 0..n {
            for j in 0..n {
                let target = if i == j { mu } else { 0.0 };
                d2 += (s[i * n + j] - target).powi(2);
            }
        }
        d2 /= n as f64;

        // b2 = average squared distance of per-observation outer products
        // from S, capped by d2.
        let mut b_bar2 = 0.0;
        for step in 0..t {
            let x = &centered[step * n..(step + 1) * n];
            for i in 0..n {
                for j in 0..n {
                    b_bar2 += (x[i] * x[j] - s[i * n + j]).powi(2);
                }
            }
        }
        b_bar2 /= (t * t) as f64 * n as f64;
        let b2 = b_bar2.min(d2);
        let shrinkage = if d2 > 0.0 { b2 / d2 } else { 1.0 };

        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                let target = if i == j { mu } else { 0.0 };
                data[i * n + j] = shrinkage * target + (1.0 - shrinkage) * s[i * n + j];
            }
        }
        Self { data, dim: n }
    }

    /// Returns the matrix dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the element at `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.dim + j]
    }

    /// Computes the Cholesky decomposition (lower-triangular `L` with
    /// `C = L * L^T`).
    ///
    /// Returns `None` when the matrix is not positive definite (a pivot
    /// falls to or below zero); callers decide whether to retry with a
    /// shrunk estimate or surface the failure.
    pub fn cholesky(&self) -> Option<CholeskyFactor> {
        let n = self.dim;
        let mut lower = vec![0.0; n * n];

        for i in 0..n {
            for j in 0..=i {
                let mut sum = 0.0;
                for k in 0..j {
                    sum += lower[i * n + k] * lower[j * n + k];
                }
                if i == j {
                    let diag = self.get(j, j) - sum;
                    if diag <= 0.0 {
                        return None;
                    }
                    lower[j * n + j] = diag.sqrt();
                } else {
                    lower[i * n + j] = (self.get(i, j) - sum) / lower[j * n + j];
                }
            }
        }
        Some(CholeskyFactor { lower, dim: n })
    }
}

/// Lower-triangular Cholesky factor of a covariance matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct CholeskyFactor {
    /// Factor elements in row-major order; strictly-upper entries are zero.
    lower: Vec<f64>,
    /// Factor dimension (n x n).
    dim: usize,
}

impl CholeskyFactor {
    /// Returns the factor dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the element at `(i, j)`; zero above the diagonal.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.lower[i * self.dim + j]
    }

    /// Transforms independent standard normals into correlated shocks,
    /// `out = L * z`.
    ///
    /// # Panics
    ///
    /// Panics if `z` or `out` differ in length from the factor dimension.
    pub fn correlate(&self, z: &[f64], out: &mut [f64]) {
        assert_eq!(z.len(), self.dim, "shock vector/dimension mismatch");
        assert_eq!(out.len(), self.dim, "output vector/dimension mismatch");
        for i in 0..self.dim {
            let mut acc = 0.0;
            for j in 0..=i {
                acc += self.lower[i * self.dim + j] * z[j];
            }
            out[i] = acc;
        }
    }
}
