//! Confidence-level type with open-interval validation.

use super::error::RiskError;

/// Confidence level for tail-risk extraction, strictly inside (0, 1).
///
/// The lower-tail percentile `(1 - level) * 100` is what the percentile
/// kernel consumes: at 0.95 confidence the 5th percentile of the return
/// distribution marks the VaR threshold.
///
/// # Examples
///
/// ```rust
/// use risk_core::types::ConfidenceLevel;
///
/// let c = ConfidenceLevel::new(0.95).unwrap();
/// assert_eq!(c.value(), 0.95);
/// assert!((c.lower_tail_percentile() - 5.0).abs() < 1e-12);
///
/// assert!(ConfidenceLevel::new(1.0).is_err());
/// assert!(ConfidenceLevel::new(0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// Creates a confidence level.
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::InvalidConfig`] unless `level` is finite and
    /// strictly inside the open interval (0, 1).
    pub fn new(level: f64) -> Result<Self, RiskError> {
        if !level.is_finite() || level <= 0.0 || level >= 1.0 {
            return Err(RiskError::config(
                "confidence_level",
                format!("{} outside (0, 1)", level),
            ));
        }
        Ok(Self(level))
    }

    /// Returns the raw level.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the lower-tail percentile `(1 - level) * 100`.
    #[inline]
    pub fn lower_tail_percentile(self) -> f64 {
        (1.0 - self.0) * 100.0
    }
}

impl Default for ConfidenceLevel {
    /// The conventional 95% level.
    fn default() -> Self {
        Self(0.95)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_accepts_open_interval() {
        for level in [0.5, 0.9, 0.95, 0.975, 0.99, 0.999] {
            assert!(ConfidenceLevel::new(level).is_ok());
        }
    }

    #[test]
    fn test_rejects_boundaries_and_outside() {
        for level in [0.0, 1.0, -0.5, 1.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                ConfidenceLevel::new(level),
                Err(RiskError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn test_lower_tail_percentile() {
        let c = ConfidenceLevel::new(0.99).unwrap();
        assert_relative_eq!(c.lower_tail_percentile(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_default_is_95() {
        assert_eq!(ConfidenceLevel::default().value(), 0.95);
    }
}
