//! Dense accumulated-cost grid.

use std::ops::Index;

use crate::cost::UNREACHED;

/// Row-major `n × m` grid of accumulated alignment costs.
///
/// Cell `(i, j)` holds the minimum cost of aligning `test[0..=i]` with
/// `reference[0..=j]`. Reachability is tracked apart from the cost, so a cell
/// whose cost overflowed to infinity is still filled. Unfilled cells lie
/// outside the band or have no admissible predecessor, and read as
/// [`UNREACHED`](crate::UNREACHED).
#[derive(Debug, Clone, PartialEq)]
pub struct CostGrid {
    rows: usize,
    cols: usize,
    cells: Vec<f64>,
    filled: Vec<bool>,
}

impl CostGrid {
    /// Allocate a grid with every cell unreached.
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![UNREACHED; rows * cols],
            filled: vec![false; rows * cols],
        }
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, value: f64) {
        let idx = i * self.cols + j;
        self.cells[idx] = value;
        self.filled[idx] = true;
    }

    /// Return the number of rows (test sequence length).
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Return the number of columns (reference sequence length).
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Return the accumulated cost at `(i, j)`, or [`UNREACHED`](crate::UNREACHED) if unfilled.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.rows, "row index {i} out of bounds for grid with {} rows", self.rows);
        assert!(j < self.cols, "column index {j} out of bounds for grid with {} columns", self.cols);
        self.cells[i * self.cols + j]
    }

    /// Return the accumulated cost at `(i, j)` if the cell was filled.
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[must_use]
    pub fn cost(&self, i: usize, j: usize) -> Option<f64> {
        let value = self.get(i, j);
        self.filled[i * self.cols + j].then_some(value)
    }

    /// Return true if `(i, j)` holds a computed cost.
    #[must_use]
    pub fn is_filled(&self, i: usize, j: usize) -> bool {
        self.cost(i, j).is_some()
    }

    /// Return the cost at the final cell `(rows - 1, cols - 1)` if it was reached.
    #[must_use]
    pub fn final_cost(&self) -> Option<f64> {
        self.cost(self.rows - 1, self.cols - 1)
    }
}

impl Index<(usize, usize)> for CostGrid {
    type Output = f64;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        &self.cells[i * self.cols + j]
    }
}
