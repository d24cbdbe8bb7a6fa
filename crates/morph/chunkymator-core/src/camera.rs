//! Camera heading along an interpolated route.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

/// Camera orientation in degrees, using Chunky's yaw/pitch conventions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraAngles {
    pub yaw: f64,
    pub pitch: f64,
}

impl CameraAngles {
    /// Heading looking along `(dx, dy, dz)`.
    pub fn looking_along(dx: f64, dy: f64, dz: f64) -> Self {
        let yaw = dx.atan2(dz) + PI / 2.0;
        let pitch = (dz * dz + dx * dx).sqrt().atan2(dy) + PI;
        Self {
            yaw: yaw.to_degrees(),
            pitch: pitch.to_degrees(),
        }
    }
}

/// One heading per position.
///
/// With a `focus` point every frame looks at it. Otherwise each frame looks
/// toward the next position and the last frame keeps the previous heading.
pub fn camera_angles(positions: &[[f64; 3]], focus: Option<[f64; 3]>) -> Vec<CameraAngles> {
    let n = positions.len();
    let mut out = Vec::with_capacity(n);
    for (i, cur) in positions.iter().enumerate() {
        let target = match focus {
            Some(f) => f,
            None if i + 1 < n => positions[i + 1],
            None => match out.last().copied() {
                Some(prev) => {
                    out.push(prev);
                    continue;
                }
                None => *cur,
            },
        };
        out.push(CameraAngles::looking_along(
            target[0] - cur[0],
            target[1] - cur[1],
            target[2] - cur[2],
        ));
    }
    out
}
