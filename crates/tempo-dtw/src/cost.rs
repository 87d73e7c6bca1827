//! Minimum selection over accumulated-cost candidates.

/// Value read from a grid cell that is out of band or has no admissible predecessor.
pub const UNREACHED: f64 = f64::INFINITY;

/// Return the smallest of `candidates`.
///
/// [`UNREACHED`] never wins against a finite candidate. It is returned when
/// every candidate is [`UNREACHED`] or `candidates` is empty. Negative
/// candidates are not excluded.
#[must_use]
pub fn minimum_of(candidates: &[f64]) -> f64 {
    candidates.iter().copied().fold(UNREACHED, f64::min)
}
