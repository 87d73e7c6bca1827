//! Local continuity constraint: the moves permitted between grid cells.

/// A single local step from predecessor `(i - rows, j - cols)` to `(i, j)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Rows advanced in the test sequence.
    pub rows: usize,
    /// Columns advanced in the reference sequence.
    pub cols: usize,
    /// Smallest row index at which the step is admissible.
    pub min_row: usize,
    /// Smallest column index at which the step is admissible.
    pub min_col: usize,
}

impl Step {
    /// Symmetric weight `Δi + Δj` applied to the local cost.
    #[must_use]
    pub fn weight(&self) -> f64 {
        (self.rows + self.cols) as f64
    }

    /// Return true if the step may end at cell `(i, j)`.
    #[must_use]
    pub fn admits(&self, i: usize, j: usize) -> bool {
        i >= self.min_row && j >= self.min_col
    }

    /// Return the predecessor cell of `(i, j)`. Only valid when [`admits`][Self::admits] holds.
    #[must_use]
    pub fn predecessor(&self, i: usize, j: usize) -> (usize, usize) {
        (i - self.rows, j - self.cols)
    }
}

/// First row at which the `(2, 1)` step becomes admissible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TwoOneGuard {
    /// Admissible for `i > 1`.
    FromRowTwo,
    /// Admissible for `i > 2`.
    FromRowThree,
}

impl TwoOneGuard {
    fn min_row(self) -> usize {
        match self {
            Self::FromRowTwo => 2,
            Self::FromRowThree => 3,
        }
    }
}

/// The five local steps of the symmetric recurrence.
///
/// | Step   | Weight | Admissible     |
/// |--------|--------|----------------|
/// | (1, 0) | 1      | always         |
/// | (0, 1) | 1      | always         |
/// | (1, 1) | 2      | always         |
/// | (1, 2) | 3      | `j > 1`        |
/// | (2, 1) | 3      | per [`TwoOneGuard`] |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepPattern([Step; 5]);

impl StepPattern {
    /// Build the symmetric five-step pattern with the given `(2, 1)` guard.
    #[must_use]
    pub fn symmetric(guard: TwoOneGuard) -> Self {
        Self([
            Step { rows: 1, cols: 0, min_row: 1, min_col: 0 },
            Step { rows: 0, cols: 1, min_row: 0, min_col: 1 },
            Step { rows: 1, cols: 1, min_row: 1, min_col: 1 },
            Step { rows: 1, cols: 2, min_row: 1, min_col: 2 },
            Step { rows: 2, cols: 1, min_row: guard.min_row(), min_col: 1 },
        ])
    }

    /// Return the steps as a slice.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a StepPattern {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
