//! Interpolated empirical percentile.
//!
//! One kernel serves every tail extractor in the engine: historical VaR,
//! the Expected Shortfall threshold, and Monte Carlo VaR. Sharing the
//! routine is what keeps ES numerically consistent with the VaR it
//! conditions on; a second, subtly different percentile implementation is
//! exactly the divergence this module exists to prevent.

/// Percentile of `data` at `pct` in [0, 100], linearly interpolating
/// between order statistics.
///
/// For a sorted sample of size n the rank is `pct / 100 * (n - 1)`;
/// fractional ranks interpolate between the two neighbouring order
/// statistics. This matches the conventional "linear" definition used by
/// numerical libraries.
///
/// Returns `None` for an empty slice or a percentile outside [0, 100].
///
/// # Examples
///
/// ```rust
/// use risk_core::math::percentile::percentile;
///
/// let data = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(percentile(&data, 0.0), Some(1.0));
/// assert_eq!(percentile(&data, 100.0), Some(4.0));
/// // rank 1.5 between the 2nd and 3rd order statistics
/// assert_eq!(percentile(&data, 50.0), Some(2.5));
/// ```
pub fn percentile(data: &[f64], pct: f64) -> Option<f64> {
    if data.is_empty() || !(0.0..=100.0).contains(&pct) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let rank = pct / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = rank - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}
