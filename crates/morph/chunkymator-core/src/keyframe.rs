//! Keyframe capability required by route timing and sun normalization.

use serde::{Deserialize, Serialize};

/// A temporally ordered sample with a spatial position and a sun altitude.
pub trait Keyframe {
    /// Spatial coordinates (x, y, z).
    fn position(&self) -> [f64; 3];

    fn sun_altitude(&self) -> f64;

    fn set_sun_altitude(&mut self, altitude: f64);
}

/// Plain keyframe record, e.g. extracted from a scene file by a driver.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneKeyframe {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    #[serde(default)]
    pub sun_altitude: f64,
}

impl SceneKeyframe {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x,
            y,
            z,
            sun_altitude: 0.0,
        }
    }

    pub fn with_sun_altitude(mut self, altitude: f64) -> Self {
        self.sun_altitude = altitude;
        self
    }
}

impl Keyframe for SceneKeyframe {
    #[inline]
    fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[inline]
    fn sun_altitude(&self) -> f64 {
        self.sun_altitude
    }

    #[inline]
    fn set_sun_altitude(&mut self, altitude: f64) {
        self.sun_altitude = altitude;
    }
}

/// Euclidean distance between two positions.
#[inline]
pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
    let dx = b[0] - a[0];
    let dy = b[1] - a[1];
    let dz = b[2] - a[2];
    (dx * dx + dy * dy + dz * dz).sqrt()
}
