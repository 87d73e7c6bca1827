//! Banded dynamic time warping distances.
//!
//! Pure math library, zero I/O. Computes the minimum-cost monotone alignment
//! between two sequences of possibly different lengths under a five-step
//! symmetric local constraint and a global bandwidth constraint. Two aligners
//! are provided:
//!
//! - [`ScalarAligner`] for real-valued samples, returning the raw accumulated cost.
//! - [`VectorAligner`] for fixed-dimension feature frames (e.g. MFCCs) with
//!   optional per-dimension variance, returning cost normalized by `n + m`.
//!
//! ```
//! use tempo_dtw::{Aligner, ScalarAligner};
//!
//! let aligner = ScalarAligner::new(vec![0.0], vec![0.0, 5.0])?;
//! assert_eq!(aligner.distance()?.value(), 5.0);
//! # Ok::<(), tempo_dtw::AlignError>(())
//! ```

mod aligner;
mod config;
mod constraint;
mod cost;
mod distance;
mod dtw;
mod error;
mod grid;
mod scalar;
mod series;
mod steps;
mod vector;

pub use aligner::Aligner;
pub use config::AlignerConfig;
pub use constraint::{BandConstraint, DEFAULT_RADIUS};
pub use cost::{UNREACHED, minimum_of};
pub use distance::AlignmentDistance;
pub use error::{AlignError, SequenceRole};
pub use grid::CostGrid;
pub use scalar::{EMPTY_INPUT_SENTINEL, ScalarAligner};
pub use series::Variance;
pub use steps::{Step, StepPattern, TwoOneGuard};
pub use vector::VectorAligner;
