//! Error types for sequence validation and alignment.

use std::fmt;

/// Which side of an alignment a sequence plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceRole {
    /// The query sequence (grid rows).
    Test,
    /// The template sequence (grid columns).
    Reference,
}

impl fmt::Display for SequenceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Test => f.write_str("test"),
            Self::Reference => f.write_str("reference"),
        }
    }
}

/// Errors from aligner construction and distance computation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AlignError {
    /// Returned when a sequence has no samples.
    #[error("{role} sequence must be non-empty")]
    EmptySequence {
        /// The offending sequence.
        role: SequenceRole,
    },

    /// Returned when a sample is NaN, infinity, or negative infinity.
    #[error("{role} sequence contains non-finite value at index {index}")]
    NonFiniteValue {
        /// The offending sequence.
        role: SequenceRole,
        /// Position of the first non-finite sample (frame index for vector sequences).
        index: usize,
    },

    /// Returned when the first test frame has no feature dimensions.
    #[error("feature frames must have at least one dimension")]
    ZeroDimension,

    /// Returned when a frame's length differs from the inferred dimension.
    #[error("{role} frame {frame} has {found} dimensions, expected {expected}")]
    DimensionMismatch {
        /// The offending sequence.
        role: SequenceRole,
        /// Index of the offending frame.
        frame: usize,
        /// Dimension inferred from the first test frame.
        expected: usize,
        /// Dimension of the offending frame.
        found: usize,
    },

    /// Returned when the variance vector length differs from the frame dimension.
    #[error("variance has {found} entries, expected {expected}")]
    VarianceLength {
        /// Frame dimension.
        expected: usize,
        /// Number of variance entries supplied.
        found: usize,
    },

    /// Returned when a variance entry is zero, negative, or non-finite.
    #[error("variance entry {index} must be finite and strictly positive, got {value}")]
    InvalidVariance {
        /// Position of the offending entry.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Returned when the band leaves the final grid cell without an admissible predecessor.
    #[error("no admissible path reaches cell ({row}, {col}) with radius {radius}", row = .n - 1, col = .m - 1)]
    BandStarvation {
        /// Length of the test sequence.
        n: usize,
        /// Length of the reference sequence.
        m: usize,
        /// Configured global path constraint.
        radius: usize,
    },

    /// Returned when the accumulated cost at the final grid cell is not finite.
    #[error("accumulated cost at cell ({row}, {col}) overflowed", row = .n - 1, col = .m - 1)]
    CostOverflow {
        /// Length of the test sequence.
        n: usize,
        /// Length of the reference sequence.
        m: usize,
    },
}
