//! Sun altitude normalization across a keyframe route.
//!
//! Keyframes are usually captured with the sun either rising or setting over
//! the whole route. A reversal part-way through makes the interpolated sun
//! bob up and down, so reversals against the route's dominant trend are
//! flattened out.

use std::cmp::Ordering;

use tracing::{debug, warn};

use crate::keyframe::Keyframe;

/// Whether a sequence starting with `a, b` counts as rising. A flat start
/// counts as rising.
#[inline]
fn rises(a: f64, b: f64) -> bool {
    a.partial_cmp(&b) != Some(Ordering::Greater)
}

/// Whether the pair `a, b` moves against the trend.
#[inline]
fn breaks_trend(rising: bool, a: f64, b: f64) -> bool {
    if rising {
        a > b
    } else {
        a < b
    }
}

/// Index of the element right after the first reversal of direction, or
/// `None` when the sequence is monotonic or shorter than three elements.
///
/// The trend is seeded by the first pair, with a flat first pair counting as
/// rising. Later plateaus never break it. NaN comparisons never break it.
pub fn find_inflection(values: &[f64]) -> Option<usize> {
    if values.len() < 3 {
        return None;
    }
    let rising = rises(values[0], values[1]);
    values
        .windows(2)
        .position(|w| breaks_trend(rising, w[0], w[1]))
        .map(|i| i + 1)
}

fn is_monotonic(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1]) || values.windows(2).all(|w| w[0] >= w[1])
}

/// Copy of `keyframes` whose sun altitude follows a single trend.
///
/// Monotonic sequences (plateaus allowed) are returned unchanged. Otherwise
/// the trend of the first pair wins, as in [`find_inflection`], and every
/// later altitude moving against it is clamped to the extremum reached so far.
pub fn override_sun_movement<K: Keyframe + Clone>(keyframes: &[K]) -> Vec<K> {
    let mut out = keyframes.to_vec();
    let altitudes: Vec<f64> = out.iter().map(Keyframe::sun_altitude).collect();
    if is_monotonic(&altitudes) {
        return out;
    }
    let Some(inflection) = find_inflection(&altitudes) else {
        return out;
    };

    let rising = rises(altitudes[0], altitudes[1]);
    warn!(
        "sun altitude reverses at keyframe {inflection}; clamping to {} trend",
        if rising { "rising" } else { "setting" }
    );

    let mut extremum = altitudes[0];
    for (i, keyframe) in out.iter_mut().enumerate().skip(1) {
        let alt = altitudes[i];
        if breaks_trend(rising, extremum, alt) {
            debug!("keyframe {i}: sun altitude {alt} clamped to {extremum}");
            keyframe.set_sun_altitude(extremum);
        } else {
            extremum = alt;
        }
    }
    out
}
