//! Interpolating spline primitives:
//! - natural cubic spline (default basis for numeric leaves)
//! - piecewise linear spline
//!
//! Both reproduce their samples exactly at the sample times and accept
//! non-uniformly spaced, strictly increasing times.

use super::{check_increasing, check_samples, segment_index, Spline, SplineBuilder};
use crate::error::Result;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Natural cubic spline: C2-continuous, zero second derivative at both ends.
/// Outside the sampled range the first/last segment's cubic is extended.
#[derive(Debug, Clone)]
pub struct CubicSpline {
    times: Vec<f64>,
    values: Vec<f64>,
    /// Second derivative at each knot
    second: Vec<f64>,
}

impl CubicSpline {
    pub fn new(times: &[f64], values: &[f64]) -> Result<Self> {
        check_samples(times, values.len(), 2)?;
        check_increasing(times)?;
        let second = natural_second_derivatives(times, values);
        Ok(Self {
            times: times.to_vec(),
            values: values.to_vec(),
            second,
        })
    }
}

/// Solve the tridiagonal system for the knot second derivatives with the
/// Thomas algorithm. Ends are pinned to zero.
fn natural_second_derivatives(x: &[f64], y: &[f64]) -> Vec<f64> {
    let n = x.len();
    let mut m = vec![0.0; n];
    if n < 3 {
        return m;
    }
    // Interior unknowns m[1..n-1]
    let inner = n - 2;
    let mut diag = vec![0.0; inner];
    let mut upper = vec![0.0; inner];
    let mut rhs = vec![0.0; inner];
    for k in 0..inner {
        let i = k + 1;
        let h0 = x[i] - x[i - 1];
        let h1 = x[i + 1] - x[i];
        diag[k] = 2.0 * (h0 + h1);
        upper[k] = h1;
        rhs[k] = 6.0 * ((y[i + 1] - y[i]) / h1 - (y[i] - y[i - 1]) / h0);
    }
    // Forward sweep; the sub-diagonal entry of row k is h0 of row k.
    for k in 1..inner {
        let lower = x[k + 1] - x[k];
        let w = lower / diag[k - 1];
        diag[k] -= w * upper[k - 1];
        rhs[k] -= w * rhs[k - 1];
    }
    // Back substitution
    let mut sol = vec![0.0; inner];
    sol[inner - 1] = rhs[inner - 1] / diag[inner - 1];
    for k in (0..inner - 1).rev() {
        sol[k] = (rhs[k] - upper[k] * sol[k + 1]) / diag[k];
    }
    m[1..n - 1].copy_from_slice(&sol);
    m
}

impl Spline for CubicSpline {
    fn value_at(&self, t: f64) -> f64 {
        let i = segment_index(&self.times, t);
        let (x0, x1) = (self.times[i], self.times[i + 1]);
        let h = x1 - x0;
        let a = (x1 - t) / h;
        let b = (t - x0) / h;
        a * self.values[i]
            + b * self.values[i + 1]
            + ((a * a * a - a) * self.second[i] + (b * b * b - b) * self.second[i + 1]) * h * h
                / 6.0
    }
}

/// Builder for [`CubicSpline`]. Requires at least two samples.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubicSplineBuilder;

impl SplineBuilder for CubicSplineBuilder {
    fn name(&self) -> &str {
        "cubic"
    }

    fn build(&self, times: &[f64], values: &[f64]) -> Result<Box<dyn Spline>> {
        Ok(Box::new(CubicSpline::new(times, values)?))
    }
}

/// Piecewise linear spline; holds the end samples outside the sampled range.
#[derive(Debug, Clone)]
pub struct LinearSpline {
    times: Vec<f64>,
    values: Vec<f64>,
}

impl LinearSpline {
    pub fn new(times: &[f64], values: &[f64]) -> Result<Self> {
        check_samples(times, values.len(), 2)?;
        check_increasing(times)?;
        Ok(Self {
            times: times.to_vec(),
            values: values.to_vec(),
        })
    }
}

impl Spline for LinearSpline {
    fn value_at(&self, t: f64) -> f64 {
        let i = segment_index(&self.times, t);
        let (x0, x1) = (self.times[i], self.times[i + 1]);
        let u = ((t - x0) / (x1 - x0)).clamp(0.0, 1.0);
        lerp(self.values[i], self.values[i + 1], u)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSplineBuilder;

impl SplineBuilder for LinearSplineBuilder {
    fn name(&self) -> &str {
        "linear"
    }

    fn build(&self, times: &[f64], values: &[f64]) -> Result<Box<dyn Spline>> {
        Ok(Box::new(LinearSpline::new(times, values)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MorphError;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cubic_hits_knots_with_uneven_spacing() {
        let times = [0.0, 0.5, 2.0, 2.25, 7.0];
        let values = [3.0, -1.0, 4.0, 4.5, 0.0];
        let s = CubicSpline::new(&times, &values).unwrap();
        for (t, v) in times.iter().zip(values.iter()) {
            assert_abs_diff_eq!(s.value_at(*t), *v, epsilon = 1e-12);
        }
    }

    #[test]
    fn cubic_reproduces_straight_lines() {
        let times = [0.0, 1.0, 3.0, 4.0];
        let values = [0.0, 2.0, 6.0, 8.0];
        let s = CubicSpline::new(&times, &values).unwrap();
        assert_abs_diff_eq!(s.value_at(2.0), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.value_at(5.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(s.value_at(-1.0), -2.0, epsilon = 1e-12);
    }

    #[test]
    fn cubic_is_smooth_between_knots() {
        let s = CubicSpline::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0]).unwrap();
        // Natural spline through a symmetric peak overshoots the chord.
        let mid = s.value_at(0.5);
        assert!(mid > 0.5 && mid < 1.0, "mid={mid}");
        assert_abs_diff_eq!(s.value_at(0.5), s.value_at(1.5), epsilon = 1e-12);
    }

    #[test]
    fn linear_holds_ends() {
        let s = LinearSpline::new(&[1.0, 3.0], &[10.0, 20.0]).unwrap();
        assert_abs_diff_eq!(s.value_at(2.0), 15.0);
        assert_abs_diff_eq!(s.value_at(0.0), 10.0);
        assert_abs_diff_eq!(s.value_at(10.0), 20.0);
    }

    #[test]
    fn builders_fail_loudly_on_short_input() {
        assert!(matches!(
            CubicSplineBuilder.build(&[0.0], &[1.0]),
            Err(MorphError::InvalidSamples { .. })
        ));
        assert!(matches!(
            LinearSplineBuilder.build(&[0.0, 0.0], &[1.0, 2.0]),
            Err(MorphError::NonMonotonicTimes { index: 1 })
        ));
    }
}
