//! Arc-length time parameterization of a keyframe route.
//!
//! Keyframe i is reached after travelling the cumulative path distance up to
//! it at `speed`; times are expressed in frames, so
//! `time_i = Σ distance_j * frame_rate / speed`.
//!
//! With a fixed length the whole axis is scaled by one factor so that the last
//! time equals it. A route whose keyframes all coincide has no distance to
//! scale, so it is spread uniformly over the fixed length instead.

use crate::error::{MorphError, Result};
use crate::keyframe::{distance, Keyframe};

/// Time axis (one entry per keyframe, in frames) and the geometric path length.
///
/// The returned length is always the true path length, regardless of
/// `fixed_length`. Zero keyframes yield `([], 0)`, a single keyframe `([0], 0)`.
pub fn get_times<K: Keyframe>(
    keyframes: &[K],
    frame_rate: f64,
    speed: f64,
    fixed_length: Option<f64>,
) -> Result<(Vec<f64>, f64)> {
    check_positive("frame rate", frame_rate)?;
    check_positive("speed", speed)?;
    if let Some(l) = fixed_length {
        if !l.is_finite() || l < 0.0 {
            return Err(MorphError::InvalidRate {
                name: "fixed length".to_string(),
                value: l,
            });
        }
    }

    if keyframes.is_empty() {
        return Ok((Vec::new(), 0.0));
    }

    let mut times = Vec::with_capacity(keyframes.len());
    times.push(0.0);
    let mut total = 0.0;
    for pair in keyframes.windows(2) {
        let d = distance(pair[0].position(), pair[1].position());
        let prev = times[times.len() - 1];
        times.push(prev + d * frame_rate / speed);
        total += d;
    }

    if let Some(fixed) = fixed_length {
        let n = times.len();
        if n > 1 {
            if total == 0.0 {
                let steps = (n - 1) as f64;
                for (i, t) in times.iter_mut().enumerate() {
                    *t = fixed * i as f64 / steps;
                }
            } else {
                let factor = fixed / times[n - 1];
                for t in times.iter_mut() {
                    *t *= factor;
                }
                // Last time equals the fixed length exactly.
                times[n - 1] = fixed;
            }
        }
    }

    Ok((times, total))
}

fn check_positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(MorphError::InvalidRate {
            name: name.to_string(),
            value,
        })
    }
}

/// Number of frames needed to fly a route of `length` at `speed`.
#[inline]
pub fn estimated_frame_count(length: f64, frame_rate: f64, speed: f64) -> usize {
    if speed <= 0.0 || !length.is_finite() {
        return 0;
    }
    (frame_rate * (length / speed)).max(0.0) as usize
}
