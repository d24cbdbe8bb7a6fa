//! Post-transform decorator over any spline.
//!
//! `ConstraintSpline` builds its base spline through an injected builder and
//! applies an optional [`Constraint`] to every evaluated value.

use std::fmt;
use std::sync::Arc;

use super::{Spline, SplineBuilder};
use crate::error::Result;
use crate::value::ValueTree;

/// Transform applied to raw spline output.
#[derive(Clone)]
pub enum Constraint {
    /// Round to the nearest integer (halves away from zero)
    Integer,
    /// Arbitrary unary transform
    Map(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl Constraint {
    pub fn map(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Constraint::Map(Arc::new(f))
    }

    #[inline]
    pub fn apply(&self, raw: f64) -> f64 {
        match self {
            Constraint::Integer => raw.round(),
            Constraint::Map(f) => f(raw),
        }
    }
}

impl fmt::Debug for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::Integer => f.write_str("Integer"),
            Constraint::Map(_) => f.write_str("Map(..)"),
        }
    }
}

pub struct ConstraintSpline {
    base: Box<dyn Spline>,
    constraint: Option<Constraint>,
}

impl ConstraintSpline {
    pub fn new(
        builder: &dyn SplineBuilder,
        times: &[f64],
        values: &[f64],
        constraint: Option<Constraint>,
    ) -> Result<Self> {
        Ok(Self {
            base: builder.build(times, values)?,
            constraint,
        })
    }

    pub fn constraint(&self) -> Option<&Constraint> {
        self.constraint.as_ref()
    }

    /// Typed evaluation: `Int` under integer coercion, `Real` otherwise.
    ///
    /// The integer cast is lossy at the edges: values beyond the `i64` range
    /// (far extrapolation) saturate to `i64::MIN`/`i64::MAX` and NaN becomes 0.
    pub fn sample(&self, t: f64) -> ValueTree {
        let v = self.value_at(t);
        match self.constraint {
            Some(Constraint::Integer) => ValueTree::Int(v as i64),
            _ => ValueTree::Real(v),
        }
    }
}

impl Spline for ConstraintSpline {
    fn value_at(&self, t: f64) -> f64 {
        let raw = self.base.value_at(t);
        match &self.constraint {
            Some(c) => c.apply(raw),
            None => raw,
        }
    }
}

impl fmt::Debug for ConstraintSpline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintSpline")
            .field("constraint", &self.constraint)
            .finish_non_exhaustive()
    }
}

/// Builder decorator applying one constraint to every spline it builds.
pub struct ConstrainedBuilder {
    base: Arc<dyn SplineBuilder>,
    constraint: Option<Constraint>,
}

impl ConstrainedBuilder {
    pub fn new(base: Arc<dyn SplineBuilder>, constraint: Option<Constraint>) -> Self {
        Self { base, constraint }
    }
}

impl SplineBuilder for ConstrainedBuilder {
    fn name(&self) -> &str {
        self.base.name()
    }

    fn build(&self, times: &[f64], values: &[f64]) -> Result<Box<dyn Spline>> {
        Ok(Box::new(ConstraintSpline::new(
            self.base.as_ref(),
            times,
            values,
            self.constraint.clone(),
        )?))
    }
}
