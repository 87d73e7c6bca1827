//! DTW over sequences of single real samples.

use tracing::{debug, instrument, warn};

use crate::aligner::Aligner;
use crate::config::AlignerConfig;
use crate::cost::UNREACHED;
use crate::distance::AlignmentDistance;
use crate::dtw;
use crate::error::{AlignError, SequenceRole};
use crate::grid::CostGrid;
use crate::series::check_finite;

/// Value returned by [`ScalarAligner::distance_or_sentinel`] for empty input.
pub const EMPTY_INPUT_SENTINEL: f64 = -1.0;

/// Aligns two scalar sequences with absolute-difference local cost.
///
/// Returns the raw accumulated cost, without length normalization. Uses
/// [`AlignerConfig::scalar`] unless overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarAligner {
    test: Vec<f64>,
    reference: Vec<f64>,
    config: AlignerConfig,
}

impl ScalarAligner {
    /// Create an aligner, validating that every sample is finite.
    ///
    /// Empty sequences are accepted here and reported by [`distance`][Aligner::distance].
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AlignError::NonFiniteValue`] | Any sample is NaN or infinite |
    pub fn new(test: Vec<f64>, reference: Vec<f64>) -> Result<Self, AlignError> {
        check_finite(&test, SequenceRole::Test)?;
        check_finite(&reference, SequenceRole::Reference)?;
        Ok(Self {
            test,
            reference,
            config: AlignerConfig::scalar(),
        })
    }

    /// Set the global path constraint radius.
    #[must_use]
    pub fn with_radius(mut self, radius: usize) -> Self {
        self.config = self.config.with_radius(radius);
        self
    }

    /// Replace the whole recurrence configuration.
    #[must_use]
    pub fn with_config(mut self, config: AlignerConfig) -> Self {
        self.config = config;
        self
    }

    /// Return the test sequence.
    #[must_use]
    pub fn test(&self) -> &[f64] {
        &self.test
    }

    /// Return the reference sequence.
    #[must_use]
    pub fn reference(&self) -> &[f64] {
        &self.reference
    }

    /// Compute the distance, folding failures into sentinel values.
    ///
    /// | Outcome | Result |
    /// |---|---|
    /// | Success | The raw accumulated cost |
    /// | Empty input | [`EMPTY_INPUT_SENTINEL`] |
    /// | Band starvation | `f64::INFINITY` |
    /// | Cost overflow | `f64::INFINITY` |
    #[must_use]
    pub fn distance_or_sentinel(&self) -> f64 {
        match self.distance() {
            Ok(d) => d.value(),
            Err(AlignError::EmptySequence { .. }) => EMPTY_INPUT_SENTINEL,
            Err(_) => UNREACHED,
        }
    }

    fn check_non_empty(&self) -> Result<(), AlignError> {
        for (role, seq) in [
            (SequenceRole::Test, &self.test),
            (SequenceRole::Reference, &self.reference),
        ] {
            if seq.is_empty() {
                warn!(%role, "sequence has zero length");
                return Err(AlignError::EmptySequence { role });
            }
        }
        Ok(())
    }
}

impl Aligner for ScalarAligner {
    fn config(&self) -> &AlignerConfig {
        &self.config
    }

    fn cost_grid(&self) -> Result<CostGrid, AlignError> {
        self.check_non_empty()?;
        let (test, reference) = (&self.test, &self.reference);
        Ok(dtw::accumulate(
            test.len(),
            reference.len(),
            &self.config,
            |i, j| (test[i] - reference[j]).abs(),
        ))
    }

    #[instrument(skip(self), fields(n = self.test.len(), m = self.reference.len(), radius = self.config.radius()))]
    fn distance(&self) -> Result<AlignmentDistance, AlignError> {
        let grid = self.cost_grid()?;
        let total = dtw::final_cost(&grid, &self.config)?;
        debug!(total, "scalar alignment complete");
        Ok(AlignmentDistance::new(total))
    }
}
