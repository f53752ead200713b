//! Moment estimators for scalar return series.
//!
//! Conventions match the upstream data tooling the engine's records are
//! compared against: sample standard deviation with the n-1 divisor,
//! adjusted Fisher-Pearson skewness, and bias-corrected excess kurtosis.
//! The bias corrections are undefined below n = 3 (skewness) and n = 4
//! (kurtosis); estimators return `None` there instead of emitting NaN.

/// Arithmetic mean. `None` on an empty slice.
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    Some(data.iter().sum::<f64>() / data.len() as f64)
}

/// Unbiased sample variance (n-1 divisor). `None` below two observations.
pub fn sample_variance(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 2 {
        return None;
    }
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    Some(ss / (n - 1) as f64)
}

/// Sample standard deviation (n-1 divisor). `None` below two observations.
pub fn sample_std(data: &[f64]) -> Option<f64> {
    sample_variance(data).map(f64::sqrt)
}

/// Adjusted Fisher-Pearson sample skewness.
///
/// ```text
/// G1 = sqrt(n(n-1)) / (n-2) * m3 / m2^(3/2)
/// ```
///
/// where `m2`, `m3` are central moments with the n divisor. `None` below
/// three observations or for a constant series (`m2 == 0`).
pub fn skewness(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 3 {
        return None;
    }
    let m = mean(data)?;
    let nf = n as f64;
    let m2: f64 = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / nf;
    let m3: f64 = data.iter().map(|x| (x - m).powi(3)).sum::<f64>() / nf;
    if m2 <= 0.0 {
        return None;
    }
    let g1 = m3 / m2.powf(1.5);
    Some((nf * (nf - 1.0)).sqrt() / (nf - 2.0) * g1)
}

/// Bias-corrected sample excess kurtosis.
///
/// ```text
/// G2 = ((n+1) * (m4/m2^2 - 3) + 6) * (n-1) / ((n-2)(n-3))
/// ```
///
/// `None` below four observations or for a constant series.
pub fn excess_kurtosis(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 4 {
        return None;
    }
    let m = mean(data)?;
    let nf = n as f64;
    let m2: f64 = data.iter().map(|x| (x - m).powi(2)).sum::<f64>() / nf;
    let m4: f64 = data.iter().map(|x| (x - m).powi(4)).sum::<f64>() / nf;
    if m2 <= 0.0 {
        return None;
    }
    let g2 = m4 / (m2 * m2) - 3.0;
    Some(((nf + 1.0) * g2 + 6.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_std() {
        let data = [1.0, 2.0, 3.0, 4.0];
        assert_relative_eq!(mean(&data).unwrap(), 2.5, epsilon = 1e-12);
        // variance = (2.25 + 0.25 + 0.25 + 2.25) / 3
        assert_relative_eq!(
            sample_variance(&data).unwrap(),
            5.0 / 3.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            sample_std(&data).unwrap(),
            (5.0f64 / 3.0).sqrt(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_short_series_undefined() {
        assert_eq!(mean(&[]), None);
        assert_eq!(sample_std(&[1.0]), None);
        assert_eq!(skewness(&[1.0, 2.0]), None);
        assert_eq!(excess_kurtosis(&[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn test_constant_series_undefined() {
        let data = [0.5; 10];
        assert_eq!(skewness(&data), None);
        assert_eq!(excess_kurtosis(&data), None);
    }

    #[test]
    fn test_symmetric_series_zero_skew() {
        let data = [-2.0, -1.0, 0.0, 1.0, 2.0];
        assert_relative_eq!(skewness(&data).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_reference_value() {
        // n=5, mean 4, m2=10, m3=36: G1 = sqrt(20)/3 * 36/10^1.5 = 1.2*sqrt(2)
        let data = [1.0, 2.0, 3.0, 4.0, 10.0];
        assert_relative_eq!(
            skewness(&data).unwrap(),
            1.2 * std::f64::consts::SQRT_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_kurtosis_reference_value() {
        // n=5, m2=10, m4=278.8: g2 = -0.212, G2 = (6*g2 + 6) * 4 / 6 = 3.152
        let data = [1.0, 2.0, 3.0, 4.0, 10.0];
        assert_relative_eq!(excess_kurtosis(&data).unwrap(), 3.152, epsilon = 1e-12);
    }

    #[test]
    fn test_kurtosis_uniformish_is_platykurtic() {
        let data: Vec<f64> = (0..100).map(|i| i as f64).collect();
        // A flat distribution has negative excess kurtosis (around -1.2).
        let k = excess_kurtosis(&data).unwrap();
        assert!(k < -1.0 && k > -1.3, "kurtosis {}", k);
    }
}
