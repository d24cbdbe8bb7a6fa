//! Constant "spline" that always yields the first sample.
//!
//! Used explicitly to disable interpolation, and implicitly for leaves that
//! cannot be interpolated (text and flag tags).

use super::{check_samples, Spline, SplineBuilder};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct DummySpline<T> {
    first: T,
}

impl<T: Clone> DummySpline<T> {
    /// Requires one value per time and at least one sample.
    pub fn new(times: &[f64], values: &[T]) -> Result<Self> {
        check_samples(times, values.len(), 1)?;
        Ok(Self {
            first: values[0].clone(),
        })
    }

    /// Ignores `t`.
    #[inline]
    pub fn value(&self, _t: f64) -> T {
        self.first.clone()
    }
}

impl Spline for DummySpline<f64> {
    fn value_at(&self, t: f64) -> f64 {
        self.value(t)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DummyBuilder;

impl SplineBuilder for DummyBuilder {
    fn name(&self) -> &str {
        "dummy"
    }

    fn build(&self, times: &[f64], values: &[f64]) -> Result<Box<dyn Spline>> {
        Ok(Box::new(DummySpline::new(times, values)?))
    }
}
