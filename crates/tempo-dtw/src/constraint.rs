//! Global path constraint (bandwidth) for the DTW recurrence.

use std::ops::Range;

/// Default global path constraint radius.
pub const DEFAULT_RADIUS: usize = 20;

/// Constraint on how far an alignment may stray from the diagonal.
///
/// Both policies restrict only the interior of the cost grid. The first row
/// and first column are always filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BandConstraint {
    /// Row `i` computes columns `max(1, i - r/2) .. min(m, i + r/2)`.
    HalfRadius(usize),

    /// Row `i` computes columns `max(1, i - r) .. min(m, i + r)`.
    FullRadius(usize),
}

impl BandConstraint {
    /// Return the configured radius `r`.
    #[must_use]
    pub fn radius(&self) -> usize {
        match self {
            Self::HalfRadius(r) | Self::FullRadius(r) => *r,
        }
    }

    /// Return the number of columns the band extends on each side of the diagonal.
    #[must_use]
    pub fn half_width(&self) -> usize {
        match self {
            Self::HalfRadius(r) => r / 2,
            Self::FullRadius(r) => *r,
        }
    }

    /// Return the same policy with a different radius.
    #[must_use]
    pub fn with_radius(self, radius: usize) -> Self {
        match self {
            Self::HalfRadius(_) => Self::HalfRadius(radius),
            Self::FullRadius(_) => Self::FullRadius(radius),
        }
    }

    /// Return the interior column range computed for `row`.
    ///
    /// The range is half-open and never includes column 0, which belongs to
    /// the boundary. It is empty when the band does not intersect the grid.
    #[must_use]
    pub fn interior_columns(&self, row: usize, n_cols: usize) -> Range<usize> {
        let w = self.half_width();
        let start = row.saturating_sub(w).max(1);
        let end = row.saturating_add(w).min(n_cols);
        start..end.max(start)
    }
}

impl Default for BandConstraint {
    fn default() -> Self {
        Self::FullRadius(DEFAULT_RADIUS)
    }
}
