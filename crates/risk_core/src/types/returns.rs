//! Return-series matrix and portfolio weight vector.
//!
//! The return matrix is produced upstream by the data-acquisition
//! collaborator (price differencing already applied); this module only
//! validates and serves it. Invariants enforced at construction:
//!
//! - at least one asset column
//! - at least two time steps
//! - every cell finite (no NaN, no missing values)
//!
//! Weights are taken as supplied. The engine never renormalises them, so a
//! weight/column-order mismatch is a caller bug surfaced as an error rather
//! than silently tolerated.

use super::error::{RiskError, Stage};

/// Fractional period-over-period returns, T time steps by N assets.
///
/// Stored row-major: `data[t * n_assets + asset]`.
///
/// # Examples
///
/// ```rust
/// use risk_core::types::ReturnsMatrix;
///
/// let returns = ReturnsMatrix::from_rows(&[
///     vec![0.010, -0.004],
///     vec![-0.002, 0.007],
/// ]).unwrap();
///
/// assert_eq!(returns.n_periods(), 2);
/// assert_eq!(returns.n_assets(), 2);
/// assert_eq!(returns.get(1, 0), -0.002);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnsMatrix {
    /// Cell values in row-major order.
    data: Vec<f64>,
    /// Number of time steps (T).
    n_periods: usize,
    /// Number of assets (N).
    n_assets: usize,
}

impl ReturnsMatrix {
    /// Creates a matrix from a flat row-major buffer.
    ///
    /// # Arguments
    ///
    /// * `data` - Cell values, `n_periods * n_assets` entries
    /// * `n_assets` - Number of asset columns
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidInput`] (stage `input`) if the buffer is
    /// empty, its length is not a multiple of `n_assets`, fewer than two
    /// rows result, or any cell is non-finite.
    pub fn new(data: Vec<f64>, n_assets: usize) -> Result<Self, RiskError> {
        if n_assets == 0 {
            return Err(RiskError::input(Stage::Input, "asset count is zero"));
        }
        if data.is_empty() {
            return Err(RiskError::input(Stage::Input, "return matrix is empty"));
        }
        if data.len() % n_assets != 0 {
            return Err(RiskError::input(
                Stage::Input,
                format!(
                    "buffer length {} is not a multiple of asset count {}",
                    data.len(),
                    n_assets
                ),
            ));
        }
        let n_periods = data.len() / n_assets;
        if n_periods < 2 {
            return Err(RiskError::input(
                Stage::Input,
                format!("need at least 2 time steps, got {}", n_periods),
            ));
        }
        if let Some(pos) = data.iter().position(|v| !v.is_finite()) {
            return Err(RiskError::input(
                Stage::Input,
                format!(
                    "non-finite return {} at row {}, column {}",
                    data[pos],
                    pos / n_assets,
                    pos % n_assets
                ),
            ));
        }
        Ok(Self {
            data,
            n_periods,
            n_assets,
        })
    }

    /// Creates a matrix from per-period rows.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidInput`] if rows are empty, ragged, or
    /// fail the [`ReturnsMatrix::new`] invariants.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, RiskError> {
        let first_len = rows
            .first()
            .map(|r| r.len())
            .ok_or_else(|| RiskError::input(Stage::Input, "return matrix is empty"))?;
        for (t, row) in rows.iter().enumerate() {
            if row.len() != first_len {
                return Err(RiskError::input(
                    Stage::Input,
                    format!(
                        "row {} has {} columns, expected {}",
                        t,
                        row.len(),
                        first_len
                    ),
                ));
            }
        }
        let data: Vec<f64> = rows.iter().flatten().copied().collect();
        Self::new(data, first_len)
    }

    /// Returns the number of time steps (T).
    #[inline]
    pub fn n_periods(&self) -> usize {
        self.n_periods
    }

    /// Returns the number of assets (N).
    #[inline]
    pub fn n_assets(&self) -> usize {
        self.n_assets
    }

    /// Returns the row of returns at time step `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t >= n_periods()`.
    #[inline]
    pub fn row(&self, t: usize) -> &[f64] {
        let start = t * self.n_assets;
        &self.data[start..start + self.n_assets]
    }

    /// Returns the cell at `(t, asset)`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, t: usize, asset: usize) -> f64 {
        assert!(asset < self.n_assets, "asset index out of range");
        self.data[t * self.n_assets + asset]
    }

    /// Returns a copy of the column for one asset.
    pub fn column(&self, asset: usize) -> Vec<f64> {
        assert!(asset < self.n_assets, "asset index out of range");
        (0..self.n_periods).map(|t| self.get(t, asset)).collect()
    }

    /// Returns the per-asset mean return vector, length N.
    pub fn mean_vector(&self) -> Vec<f64> {
        let mut means = vec![0.0; self.n_assets];
        for t in 0..self.n_periods {
            for (mean, value) in means.iter_mut().zip(self.row(t)) {
                *mean += value;
            }
        }
        let inv_t = 1.0 / self.n_periods as f64;
        for mean in &mut means {
            *mean *= inv_t;
        }
        means
    }

    /// Reduces each row against the weight vector, producing the scalar
    /// portfolio return series of length T.
    ///
    /// Returns `None` when the weight length does not match the asset
    /// count; callers tag the mismatch with their own stage.
    pub fn portfolio_returns(&self, weights: &WeightVector) -> Option<Vec<f64>> {
        if weights.len() != self.n_assets {
            return None;
        }
        let w = weights.as_slice();
        Some(
            (0..self.n_periods)
                .map(|t| {
                    self.row(t)
                        .iter()
                        .zip(w)
                        .map(|(r, weight)| r * weight)
                        .sum()
                })
                .collect(),
        )
    }
}

/// Portfolio allocation fractions, ordered to match the matrix columns.
///
/// The engine does not renormalise: the caller owns the convention that
/// the fractions sum to one.
#[derive(Clone, Debug, PartialEq)]
pub struct WeightVector {
    weights: Vec<f64>,
}

impl WeightVector {
    /// Creates a weight vector.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidInput`] if the vector is empty or any
    /// component is non-finite.
    pub fn new(weights: Vec<f64>) -> Result<Self, RiskError> {
        if weights.is_empty() {
            return Err(RiskError::input(Stage::Input, "weight vector is empty"));
        }
        if let Some(pos) = weights.iter().position(|w| !w.is_finite()) {
            return Err(RiskError::input(
                Stage::Input,
                format!("non-finite weight {} at index {}", weights[pos], pos),
            ));
        }
        Ok(Self { weights })
    }

    /// Returns the number of components.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns `true` when the vector has no components.
    ///
    /// Construction rejects empty vectors, so this is always `false` for a
    /// built value; provided for completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Returns the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.weights
    }

    /// Returns the component for one asset.
    ///
    /// # Panics
    ///
    /// Panics if `asset >= len()`.
    #[inline]
    pub fn get(&self, asset: usize) -> f64 {
        self.weights[asset]
    }
}
