//! Aligner configuration presets and builders.

use crate::constraint::{BandConstraint, DEFAULT_RADIUS};
use crate::steps::{StepPattern, TwoOneGuard};

/// Immutable recurrence configuration. Copyable and thread-safe.
///
/// Construct via [`AlignerConfig::scalar`] or [`AlignerConfig::vector`], then
/// chain `with_*` methods to override defaults.
///
/// # Presets
///
/// | Preset     | Band                      | `(2, 1)` step     |
/// |------------|---------------------------|-------------------|
/// | `scalar()` | `HalfRadius(20)`          | `FromRowThree`    |
/// | `vector()` | `FullRadius(20)`          | `FromRowTwo`      |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlignerConfig {
    band: BandConstraint,
    two_one_guard: TwoOneGuard,
}

impl AlignerConfig {
    /// Configuration used by [`ScalarAligner`](crate::ScalarAligner) by default.
    #[must_use]
    pub fn scalar() -> Self {
        Self {
            band: BandConstraint::HalfRadius(DEFAULT_RADIUS),
            two_one_guard: TwoOneGuard::FromRowThree,
        }
    }

    /// Configuration used by [`VectorAligner`](crate::VectorAligner) by default.
    #[must_use]
    pub fn vector() -> Self {
        Self {
            band: BandConstraint::FullRadius(DEFAULT_RADIUS),
            two_one_guard: TwoOneGuard::FromRowTwo,
        }
    }

    /// Set the global path constraint radius, keeping the band policy.
    #[must_use]
    pub fn with_radius(mut self, radius: usize) -> Self {
        self.band = self.band.with_radius(radius);
        self
    }

    /// Replace the band policy.
    #[must_use]
    pub fn with_band(mut self, band: BandConstraint) -> Self {
        self.band = band;
        self
    }

    /// Set the row from which the `(2, 1)` step is admissible.
    #[must_use]
    pub fn with_two_one_guard(mut self, guard: TwoOneGuard) -> Self {
        self.two_one_guard = guard;
        self
    }

    /// Return the band policy.
    #[must_use]
    pub fn band(&self) -> BandConstraint {
        self.band
    }

    /// Return the global path constraint radius.
    #[must_use]
    pub fn radius(&self) -> usize {
        self.band.radius()
    }

    /// Return the `(2, 1)` step guard.
    #[must_use]
    pub fn two_one_guard(&self) -> TwoOneGuard {
        self.two_one_guard
    }

    /// Return the local step pattern implied by this configuration.
    #[must_use]
    pub fn steps(&self) -> StepPattern {
        StepPattern::symmetric(self.two_one_guard)
    }
}
