//! DTW over sequences of fixed-dimension feature vectors.

use tracing::{debug, instrument};

use crate::aligner::Aligner;
use crate::config::AlignerConfig;
use crate::distance::AlignmentDistance;
use crate::dtw;
use crate::error::{AlignError, SequenceRole};
use crate::grid::CostGrid;
use crate::series::{FeatureFrames, Variance};

/// Aligns two feature-vector sequences with variance-weighted Euclidean local cost.
///
/// The accumulated cost is divided by `n + m`, so scores are comparable across
/// sequence lengths. Uses [`AlignerConfig::vector`] unless overridden.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorAligner {
    test: FeatureFrames,
    reference: FeatureFrames,
    variance: Variance,
    config: AlignerConfig,
}

impl VectorAligner {
    /// Create an aligner with unit variance in every dimension.
    ///
    /// The dimension is taken from the first test frame.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AlignError::EmptySequence`] | Either sequence has no frames |
    /// | [`AlignError::ZeroDimension`] | The first test frame is empty |
    /// | [`AlignError::DimensionMismatch`] | A frame's length differs from the first test frame |
    /// | [`AlignError::NonFiniteValue`] | A frame contains NaN or infinity |
    pub fn new(test: Vec<Vec<f64>>, reference: Vec<Vec<f64>>) -> Result<Self, AlignError> {
        let dim = infer_dim(&test)?;
        Self::build(test, reference, Variance::unit(dim), dim)
    }

    /// Create an aligner with per-dimension variance weights.
    ///
    /// # Errors
    ///
    /// As [`new`][Self::new], plus:
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AlignError::VarianceLength`] | `variance` length differs from the frame dimension |
    pub fn with_variance(
        test: Vec<Vec<f64>>,
        reference: Vec<Vec<f64>>,
        variance: Variance,
    ) -> Result<Self, AlignError> {
        let dim = infer_dim(&test)?;
        if variance.len() != dim {
            return Err(AlignError::VarianceLength {
                expected: dim,
                found: variance.len(),
            });
        }
        Self::build(test, reference, variance, dim)
    }

    fn build(
        test: Vec<Vec<f64>>,
        reference: Vec<Vec<f64>>,
        variance: Variance,
        dim: usize,
    ) -> Result<Self, AlignError> {
        Ok(Self {
            test: FeatureFrames::new(test, dim, SequenceRole::Test)?,
            reference: FeatureFrames::new(reference, dim, SequenceRole::Reference)?,
            variance,
            config: AlignerConfig::vector(),
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

    /// Return the feature dimension.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.test.dim()
    }

    /// Return the variance weights.
    #[must_use]
    pub fn variance(&self) -> &Variance {
        &self.variance
    }

    /// Return the accumulated cost at the final cell, before normalization.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AlignError::BandStarvation`] | The band leaves the final cell unreachable |
    /// | [`AlignError::CostOverflow`] | The accumulated cost exceeds the range of `f64` |
    pub fn raw_cost(&self) -> Result<f64, AlignError> {
        let grid = self.cost_grid()?;
        dtw::final_cost(&grid, &self.config)
    }
}

fn infer_dim(test: &[Vec<f64>]) -> Result<usize, AlignError> {
    let first = test.first().ok_or(AlignError::EmptySequence {
        role: SequenceRole::Test,
    })?;
    if first.is_empty() {
        return Err(AlignError::ZeroDimension);
    }
    Ok(first.len())
}

impl Aligner for VectorAligner {
    fn config(&self) -> &AlignerConfig {
        &self.config
    }

    fn cost_grid(&self) -> Result<CostGrid, AlignError> {
        let (test, reference, variance) = (&self.test, &self.reference, &self.variance);
        Ok(dtw::accumulate(
            test.len(),
            reference.len(),
            &self.config,
            |i, j| variance.weighted_euclidean(test.frame(i), reference.frame(j)),
        ))
    }

    #[instrument(skip(self), fields(n = self.test.len(), m = self.reference.len(), dim = self.dim(), radius = self.config.radius()))]
    fn distance(&self) -> Result<AlignmentDistance, AlignError> {
        let total = self.raw_cost()?;
        let normalized = total / (self.test.len() + self.reference.len()) as f64;
        debug!(total, normalized, "vector alignment complete");
        Ok(AlignmentDistance::new(normalized))
    }
}
