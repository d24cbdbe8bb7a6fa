//! Route planning configuration.

use serde::{Deserialize, Serialize};

use crate::interp::SplineKind;

/// Settings for [`plan_route`](crate::route::plan_route).
/// Missing fields fall back to [`RouteConfig::default`] when deserialized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RouteConfig {
    /// Playback frame rate of the rendered route (frames per second).
    pub frame_rate: f64,
    /// Camera travelling speed (blocks per second).
    pub speed: f64,
    /// Force the route to span exactly this many frames.
    pub fixed_length: Option<f64>,
    /// Flatten sun altitude reversals before interpolating.
    pub override_sun: bool,
    /// Basis used for numeric parameters.
    pub interpolation: SplineKind,
    /// Point the camera always looks at; `None` looks along the route.
    pub focus: Option<[f64; 3]>,
    pub min_keyframes: usize,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            frame_rate: 25.0,
            speed: 5.4,
            fixed_length: None,
            override_sun: false,
            interpolation: SplineKind::Cubic,
            focus: None,
            min_keyframes: 4,
        }
    }
}
