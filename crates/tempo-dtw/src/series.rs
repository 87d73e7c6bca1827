//! Validated sequence storage for the scalar and vector aligners.

use crate::error::{AlignError, SequenceRole};

/// Check that every scalar sample is finite.
///
/// Empty input passes; the scalar aligner reports emptiness at distance time.
pub(crate) fn check_finite(values: &[f64], role: SequenceRole) -> Result<(), AlignError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(AlignError::NonFiniteValue { role, index }),
        None => Ok(()),
    }
}

/// Owned feature frames stored row-major as `len × dim`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct FeatureFrames {
    data: Vec<f64>,
    dim: usize,
}

impl FeatureFrames {
    /// Flatten `frames`, checking each has `dim` finite values.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AlignError::EmptySequence`] | `frames` is empty |
    /// | [`AlignError::DimensionMismatch`] | A frame's length differs from `dim` |
    /// | [`AlignError::NonFiniteValue`] | A frame contains NaN or infinity |
    pub(crate) fn new(
        frames: Vec<Vec<f64>>,
        dim: usize,
        role: SequenceRole,
    ) -> Result<Self, AlignError> {
        if frames.is_empty() {
            return Err(AlignError::EmptySequence { role });
        }
        let mut data = Vec::with_capacity(frames.len() * dim);
        for (frame, values) in frames.into_iter().enumerate() {
            if values.len() != dim {
                return Err(AlignError::DimensionMismatch {
                    role,
                    frame,
                    expected: dim,
                    found: values.len(),
                });
            }
            if values.iter().any(|v| !v.is_finite()) {
                return Err(AlignError::NonFiniteValue { role, index: frame });
            }
            data.extend(values);
        }
        Ok(Self { data, dim })
    }

    pub(crate) fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    pub(crate) fn dim(&self) -> usize {
        self.dim
    }

    pub(crate) fn frame(&self, index: usize) -> &[f64] {
        &self.data[index * self.dim..(index + 1) * self.dim]
    }
}

/// Per-dimension variance weights for the local Euclidean distance.
///
/// Guaranteed non-empty with every entry finite and strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Variance(Vec<f64>);

impl Variance {
    /// Create variance weights, validating every entry.
    ///
    /// # Errors
    ///
    /// | Variant | Condition |
    /// |---|---|
    /// | [`AlignError::ZeroDimension`] | `values` is empty |
    /// | [`AlignError::InvalidVariance`] | An entry is zero, negative, NaN, or infinite |
    pub fn new(values: Vec<f64>) -> Result<Self, AlignError> {
        if values.is_empty() {
            return Err(AlignError::ZeroDimension);
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|&(_, &v)| !(v.is_finite() && v > 0.0))
        {
            return Err(AlignError::InvalidVariance { index, value });
        }
        Ok(Self(values))
    }

    /// Unit variance in every dimension, giving the plain Euclidean distance.
    #[must_use]
    pub fn unit(dim: usize) -> Self {
        Self(vec![1.0; dim])
    }

    /// Return the number of dimensions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Return true if there are no dimensions.
    ///
    /// Always `false` for a [`Variance`] built with [`Variance::new`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Weighted Euclidean distance `sqrt(Σ (a[d] - b[d])² / variance[d])`.
    #[must_use]
    pub(crate) fn weighted_euclidean(&self, a: &[f64], b: &[f64]) -> f64 {
        a.iter()
            .zip(b)
            .zip(&self.0)
            .map(|((x, y), var)| (x - y).powi(2) / var)
            .sum::<f64>()
            .sqrt()
    }
}

impl AsRef<[f64]> for Variance {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

impl TryFrom<Vec<f64>> for Variance {
    type Error = AlignError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}
