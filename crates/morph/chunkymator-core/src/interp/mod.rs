//! Spline capability traits and the builders shipped with the crate.
//!
//! A [`SplineBuilder`] turns sampled `(times, values)` into a [`Spline`] that
//! can be queried at any time. Builders are injected into the structural
//! interpolator, so callers can swap the interpolation basis without touching
//! the tree-walking logic.

pub mod constraint;
pub mod dummy;
pub mod functions;

use serde::{Deserialize, Serialize};

use crate::error::{MorphError, Result};

pub use constraint::{ConstrainedBuilder, Constraint, ConstraintSpline};
pub use dummy::{DummyBuilder, DummySpline};
pub use functions::{CubicSpline, CubicSplineBuilder, LinearSpline, LinearSplineBuilder};

/// A continuous scalar function of time built from samples.
pub trait Spline: Send + Sync {
    /// Evaluate at `t`; `t` may lie outside the sampled range.
    fn value_at(&self, t: f64) -> f64;
}

/// Factory for [`Spline`]s; the injectable interpolation capability.
pub trait SplineBuilder: Send + Sync {
    /// Get the name of this builder
    fn name(&self) -> &str;

    /// Build a spline through `values` sampled at `times`.
    fn build(&self, times: &[f64], values: &[f64]) -> Result<Box<dyn Spline>>;
}

/// Builders selectable by name from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplineKind {
    #[default]
    Cubic,
    Linear,
    /// Hold the first sample; disables interpolation
    Dummy,
}

impl SplineKind {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cubic => "cubic",
            Self::Linear => "linear",
            Self::Dummy => "dummy",
        }
    }

    /// Instantiate the builder for this kind.
    pub fn builder(&self) -> Box<dyn SplineBuilder> {
        match self {
            Self::Cubic => Box::new(CubicSplineBuilder),
            Self::Linear => Box::new(LinearSplineBuilder),
            Self::Dummy => Box::new(DummyBuilder),
        }
    }
}

/// Shared sample validation: equal lengths and at least `min` samples.
pub(crate) fn check_samples(times: &[f64], values_len: usize, min: usize) -> Result<()> {
    if times.len() != values_len {
        return Err(MorphError::invalid_samples(format!(
            "{} times but {} values",
            times.len(),
            values_len
        )));
    }
    if times.len() < min {
        return Err(MorphError::invalid_samples(format!(
            "need at least {min} samples, got {}",
            times.len()
        )));
    }
    Ok(())
}

/// Times must be finite and strictly increasing for interpolating splines.
pub(crate) fn check_increasing(times: &[f64]) -> Result<()> {
    if let Some(i) = times.iter().position(|t| !t.is_finite()) {
        return Err(MorphError::NonMonotonicTimes { index: i });
    }
    match times.windows(2).position(|w| w[1] <= w[0]) {
        Some(i) => Err(MorphError::NonMonotonicTimes { index: i + 1 }),
        None => Ok(()),
    }
}

/// Index `i` of the segment `[times[i], times[i+1]]` used for `t`; clamps to
/// the first/last segment outside the sampled range. Requires `times.len() >= 2`.
#[inline]
pub(crate) fn segment_index(times: &[f64], t: f64) -> usize {
    let upper = times.partition_point(|&x| x <= t);
    upper.saturating_sub(1).min(times.len() - 2)
}
