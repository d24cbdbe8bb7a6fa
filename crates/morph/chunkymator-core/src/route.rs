//! Route planning: turns keyframes plus per-keyframe parameter trees into one
//! interpolated frame per integer time step.
//!
//! Pipeline:
//! 1. optional sun altitude normalization,
//! 2. arc-length time axis ([`get_times`]),
//! 3. structural splines for the keyframe geometry and for the parameters,
//! 4. sampling at frames `0..floor(last time)`,
//! 5. camera headings along the sampled positions.
//!
//! No I/O happens here; loading scenes and writing frames is left to drivers.

use std::borrow::Cow;

use serde::Serialize;
use tracing::info;

use crate::camera::{camera_angles, CameraAngles};
use crate::config::RouteConfig;
use crate::error::{MorphError, Result};
use crate::keyframe::Keyframe;
use crate::structural::StructuralSpline;
use crate::sun::override_sun_movement;
use crate::timing::{estimated_frame_count, get_times};
use crate::value::ValueTree;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RouteFrame {
    pub index: usize,
    pub position: [f64; 3],
    pub sun_altitude: f64,
    pub angles: CameraAngles,
    /// Interpolated parameter trees, in input order
    pub parameters: Vec<ValueTree>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Route {
    /// Keyframe times, in frames
    pub times: Vec<f64>,
    /// Geometric path length
    pub length: f64,
    pub frames: Vec<RouteFrame>,
}

/// Plan a route through `keyframes`. `parameters` holds one sequence of value
/// trees per parameter, each with one tree per keyframe.
pub fn plan_route<K: Keyframe + Clone>(
    keyframes: &[K],
    parameters: &[Vec<ValueTree>],
    config: &RouteConfig,
) -> Result<Route> {
    let required = config.min_keyframes.max(1);
    if keyframes.len() < required {
        return Err(MorphError::TooFewKeyframes {
            required,
            actual: keyframes.len(),
        });
    }

    let normalized: Cow<[K]> = if config.override_sun {
        Cow::Owned(override_sun_movement(keyframes))
    } else {
        Cow::Borrowed(keyframes)
    };
    let keyframes: &[K] = &normalized;

    let (times, length) = get_times(
        keyframes,
        config.frame_rate,
        config.speed,
        config.fixed_length,
    )?;
    info!(
        "route: {} keyframes, length {:.2}, about {} frames at {} fps",
        keyframes.len(),
        length,
        estimated_frame_count(length, config.frame_rate, config.speed),
        config.frame_rate
    );

    let builder = config.interpolation.builder();
    let geometry: Vec<ValueTree> = keyframes.iter().map(geometry_tree).collect();
    let geometry_spline = StructuralSpline::new(&times, &[geometry], builder.as_ref())?;
    let parameter_spline = StructuralSpline::new(&times, parameters, builder.as_ref())?;

    let frame_count = times.last().copied().unwrap_or(0.0).max(0.0) as usize;
    let mut samples = Vec::with_capacity(frame_count);
    let mut positions = Vec::with_capacity(frame_count);
    for index in 0..frame_count {
        let t = index as f64;
        let (position, sun_altitude) =
            unpack_geometry(&geometry_spline.evaluate_parameter(0, t)?)?;
        positions.push(position);
        samples.push((index, position, sun_altitude, parameter_spline.evaluate(t)));
    }

    let angles = camera_angles(&positions, config.focus);
    let frames = samples
        .into_iter()
        .zip(angles)
        .map(
            |((index, position, sun_altitude, parameters), angles)| RouteFrame {
                index,
                position,
                sun_altitude,
                angles,
                parameters,
            },
        )
        .collect();

    Ok(Route {
        times,
        length,
        frames,
    })
}

/// `(x, y, z, sun altitude)` as a real-valued tuple.
fn geometry_tree<K: Keyframe>(keyframe: &K) -> ValueTree {
    let [x, y, z] = keyframe.position();
    ValueTree::Tuple(vec![
        ValueTree::Real(x),
        ValueTree::Real(y),
        ValueTree::Real(z),
        ValueTree::Real(keyframe.sun_altitude()),
    ])
}

/// Inverse of [`geometry_tree`].
fn unpack_geometry(tree: &ValueTree) -> Result<([f64; 3], f64)> {
    if let ValueTree::Tuple(slots) = tree {
        if let [x, y, z, sun] = slots.as_slice() {
            if let (Some(x), Some(y), Some(z), Some(sun)) =
                (x.as_f64(), y.as_f64(), z.as_f64(), sun.as_f64())
            {
                return Ok(([x, y, z], sun));
            }
        }
    }
    Err(MorphError::invalid_samples(format!(
        "expected (x, y, z, sun) tuple of numbers, found {} with {} leaves",
        tree.kind().name(),
        tree.leaf_count()
    )))
}
