//! Alignment distance newtype wrapper.

/// A finite, non-negative alignment distance.
///
/// Only produced by a successful [`Aligner::distance`](crate::Aligner::distance).
/// Unreached or overflowed grids are reported as errors instead.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct AlignmentDistance(f64);

impl AlignmentDistance {
    pub(crate) fn new(value: f64) -> Self {
        debug_assert!(
            value.is_finite() && value >= 0.0,
            "alignment distance must be finite and non-negative, got {value}"
        );
        Self(value)
    }

    /// Return the raw distance value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<AlignmentDistance> for f64 {
    fn from(d: AlignmentDistance) -> Self {
        d.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_into_f64() {
        let raw: f64 = AlignmentDistance::new(42.0).into();
        assert_eq!(raw, 42.0);
    }

    #[test]
    fn zero_is_a_valid_distance() {
        assert_eq!(AlignmentDistance::new(0.0).value(), 0.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "must be finite and non-negative")]
    fn rejects_infinite_value_in_debug_builds() {
        let _ = AlignmentDistance::new(f64::INFINITY);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "must be finite and non-negative")]
    fn rejects_negative_value_in_debug_builds() {
        let _ = AlignmentDistance::new(-1.0);
    }
}
