//! Chunkymator core (engine-agnostic)
//!
//! Turns a sparse set of camera keyframes into a smooth route:
//! - an arc-length time axis derived from keyframe positions,
//! - structural interpolation of arbitrarily nested per-keyframe parameters
//!   that keeps integers integral and leaves text tags untouched,
//! - pluggable spline bases behind the [`SplineBuilder`] trait.

pub mod camera;
pub mod config;
pub mod error;
pub mod interp;
pub mod json;
pub mod keyframe;
pub mod path;
pub mod route;
pub mod shape;
pub mod structural;
pub mod sun;
pub mod timing;
pub mod value;

// Re-exports for consumers (drivers)
pub use camera::{camera_angles, CameraAngles};
pub use config::RouteConfig;
pub use error::{MorphError, Result};
pub use interp::{
    ConstrainedBuilder, Constraint, ConstraintSpline, CubicSplineBuilder, DummyBuilder,
    DummySpline, LinearSplineBuilder, Spline, SplineBuilder, SplineKind,
};
pub use keyframe::{Keyframe, SceneKeyframe};
pub use path::TreePath;
pub use route::{plan_route, Route, RouteFrame};
pub use shape::{find_shape_mismatch, is_same_shape, ShapeMismatch};
pub use structural::StructuralSpline;
pub use sun::{find_inflection, override_sun_movement};
pub use timing::{estimated_frame_count, get_times};
pub use value::{ValueKind, ValueTree};
