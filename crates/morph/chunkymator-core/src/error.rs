//! Error types for route timing and structural interpolation

use serde::{Deserialize, Serialize};

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MorphError>;

/// Every failure the core can report. All of them surface at construction
/// time; evaluating an already-built spline never fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MorphError {
    /// A keyframe's value tree does not match the shape of the first keyframe
    #[error("Shape mismatch in parameter {parameter} at keyframe {keyframe}, path {path}: {reason}")]
    ShapeMismatch {
        parameter: usize,
        keyframe: usize,
        path: String,
        reason: String,
    },

    /// A parameter does not provide one value per time sample
    #[error("Parameter {parameter} has {actual} values, expected {expected}")]
    LengthMismatch {
        parameter: usize,
        expected: usize,
        actual: usize,
    },

    /// A leaf kind the value tree cannot represent
    #[error("Unsupported leaf {kind} at {path}")]
    UnsupportedLeaf { path: String, kind: String },

    /// Samples handed to a spline builder are unusable
    #[error("Invalid spline samples: {reason}")]
    InvalidSamples { reason: String },

    /// Sample times must be strictly increasing for interpolating splines
    #[error("Sample times are not strictly increasing at index {index}")]
    NonMonotonicTimes { index: usize },

    /// Frame rate, speed or fixed length outside their valid range
    #[error("Invalid {name}: {value}")]
    InvalidRate { name: String, value: f64 },

    /// Not enough keyframes to plan a route
    #[error("At least {required} keyframes are required, got {actual}")]
    TooFewKeyframes { required: usize, actual: usize },

    /// Parameter index past the end of a structural spline
    #[error("Parameter index {index} out of range (count {count})")]
    ParameterOutOfRange { index: usize, count: usize },
}

impl MorphError {
    /// Shorthand for [`MorphError::InvalidSamples`].
    pub fn invalid_samples(reason: impl Into<String>) -> Self {
        Self::InvalidSamples {
            reason: reason.into(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::ShapeMismatch { .. }
            | Self::LengthMismatch { .. }
            | Self::UnsupportedLeaf { .. } => "structure",
            Self::InvalidSamples { .. } | Self::NonMonotonicTimes { .. } => "spline",
            Self::InvalidRate { .. } | Self::TooFewKeyframes { .. } => "timing",
            Self::ParameterOutOfRange { .. } => "lookup",
        }
    }
}
