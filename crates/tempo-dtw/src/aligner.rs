//! Capability shared by the scalar and vector aligners.

use crate::config::AlignerConfig;
use crate::distance::AlignmentDistance;
use crate::error::AlignError;
use crate::grid::CostGrid;

/// A DTW aligner owning a test and a reference sequence.
///
/// Implementors are immutable after construction, so repeated calls return
/// bit-identical results.
pub trait Aligner {
    /// Return the configuration this aligner was built with.
    fn config(&self) -> &AlignerConfig;

    /// Return the global path constraint radius.
    fn radius(&self) -> usize {
        self.config().radius()
    }

    /// Run the recurrence and return the filled cost grid.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AlignError::EmptySequence`] | Either sequence is empty |
    fn cost_grid(&self) -> Result<CostGrid, AlignError>;

    /// Compute the alignment distance between the test and reference sequences.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AlignError::EmptySequence`] | Either sequence is empty |
    /// | [`AlignError::BandStarvation`] | The band leaves the final cell unreachable |
    /// | [`AlignError::CostOverflow`] | The accumulated cost exceeds the range of `f64` |
    fn distance(&self) -> Result<AlignmentDistance, AlignError>;
}
