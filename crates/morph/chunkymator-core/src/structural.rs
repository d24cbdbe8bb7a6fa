//! Structural interpolation of nested parameter trees.
//!
//! Model:
//! - The caller supplies one time axis of N samples and any number of
//!   parameters, each a sequence of N value trees (one per keyframe).
//! - Each parameter is shape-checked up front; a divergence fails construction.
//! - The trees are decomposed into one node per position:
//!   - numeric leaves get a spline from the injected builder; all-`Int` leaves
//!     are wrapped with integer coercion so results stay integral,
//!   - text/flag leaves hold the first keyframe's value,
//!   - tuples and maps recurse and are reassembled on evaluation.
//!
//! Evaluation is pure and never fails; it may be called at any time, including
//! outside the sampled range (extrapolation is up to the builder).

use hashbrown::HashMap;
use tracing::debug;

use crate::error::{MorphError, Result};
use crate::interp::{Constraint, ConstraintSpline, CubicSplineBuilder, DummySpline, SplineBuilder};
use crate::path::TreePath;
use crate::shape::find_shape_mismatch;
use crate::value::ValueTree;

/// Per-position interpolation node.
#[derive(Debug)]
enum Node {
    Number(ConstraintSpline),
    /// Non-interpolable leaf
    Hold(DummySpline<ValueTree>),
    Tuple(Vec<Node>),
    Map(Vec<(String, Node)>),
}

impl Node {
    fn evaluate(&self, t: f64) -> ValueTree {
        match self {
            Node::Number(spline) => spline.sample(t),
            Node::Hold(spline) => spline.value(t),
            Node::Tuple(slots) => ValueTree::Tuple(slots.iter().map(|n| n.evaluate(t)).collect()),
            Node::Map(entries) => {
                let mut out = HashMap::with_capacity(entries.len());
                for (key, node) in entries {
                    out.insert(key.clone(), node.evaluate(t));
                }
                ValueTree::Map(out)
            }
        }
    }

    fn leaf_count(&self) -> usize {
        match self {
            Node::Number(_) | Node::Hold(_) => 1,
            Node::Tuple(slots) => slots.iter().map(Node::leaf_count).sum(),
            Node::Map(entries) => entries.iter().map(|(_, n)| n.leaf_count()).sum(),
        }
    }
}

/// Interpolator over a set of parameters, each a keyframe sequence of value trees.
#[derive(Debug)]
pub struct StructuralSpline {
    times: Vec<f64>,
    roots: Vec<Node>,
}

impl StructuralSpline {
    /// Build with an explicit spline builder for numeric leaves.
    pub fn new(
        times: &[f64],
        parameters: &[Vec<ValueTree>],
        builder: &dyn SplineBuilder,
    ) -> Result<Self> {
        let n = times.len();
        for (p, samples) in parameters.iter().enumerate() {
            if samples.len() != n {
                return Err(MorphError::LengthMismatch {
                    parameter: p,
                    expected: n,
                    actual: samples.len(),
                });
            }
            if let Some(mismatch) = find_shape_mismatch(samples) {
                return Err(MorphError::ShapeMismatch {
                    parameter: p,
                    keyframe: mismatch.index,
                    path: mismatch.path.to_string(),
                    reason: mismatch.reason,
                });
            }
        }

        let mut roots = Vec::with_capacity(parameters.len());
        for samples in parameters {
            let refs: Vec<&ValueTree> = samples.iter().collect();
            roots.push(build_node(times, &refs, builder, &TreePath::root())?);
        }
        let spline = Self {
            times: times.to_vec(),
            roots,
        };
        debug!(
            "structural spline: {} parameters, {} leaves, {} samples, builder '{}'",
            spline.parameter_count(),
            spline.leaf_count(),
            n,
            builder.name()
        );
        Ok(spline)
    }

    /// Build with the default natural cubic spline.
    pub fn cubic(times: &[f64], parameters: &[Vec<ValueTree>]) -> Result<Self> {
        Self::new(times, parameters, &CubicSplineBuilder)
    }

    /// Interpolated value tree of every parameter at `t`, in construction order.
    pub fn evaluate(&self, t: f64) -> Vec<ValueTree> {
        self.roots.iter().map(|root| root.evaluate(t)).collect()
    }

    /// Interpolated value tree of a single parameter at `t`.
    pub fn evaluate_parameter(&self, index: usize, t: f64) -> Result<ValueTree> {
        self.roots
            .get(index)
            .map(|root| root.evaluate(t))
            .ok_or(MorphError::ParameterOutOfRange {
                index,
                count: self.roots.len(),
            })
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn parameter_count(&self) -> usize {
        self.roots.len()
    }

    /// Total number of leaf interpolators across all parameters.
    pub fn leaf_count(&self) -> usize {
        self.roots.iter().map(Node::leaf_count).sum()
    }
}

/// Recursive decomposition. `samples` are already shape-checked, so every
/// element has the container kind, keys and arity of `samples[0]`.
fn build_node(
    times: &[f64],
    samples: &[&ValueTree],
    builder: &dyn SplineBuilder,
    path: &TreePath,
) -> Result<Node> {
    let Some(first) = samples.first() else {
        return Err(MorphError::invalid_samples(format!("no samples at {path}")));
    };
    match first {
        ValueTree::Int(_) | ValueTree::Real(_) => {
            let values = numeric_column(samples, path)?;
            let constraint = samples
                .iter()
                .all(|s| s.is_int())
                .then_some(Constraint::Integer);
            Ok(Node::Number(ConstraintSpline::new(
                builder, times, &values, constraint,
            )?))
        }
        ValueTree::Text(_) | ValueTree::Flag(_) => {
            let values: Vec<ValueTree> = samples.iter().map(|s| (*s).clone()).collect();
            Ok(Node::Hold(DummySpline::new(times, &values)?))
        }
        ValueTree::Tuple(items) => {
            let mut slots = Vec::with_capacity(items.len());
            for i in 0..items.len() {
                let column = samples
                    .iter()
                    .map(|s| s.slot(i).ok_or_else(|| missing(path, &i.to_string())))
                    .collect::<Result<Vec<_>>>()?;
                slots.push(build_node(times, &column, builder, &path.index(i))?);
            }
            Ok(Node::Tuple(slots))
        }
        ValueTree::Map(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut entries = Vec::with_capacity(keys.len());
            for key in keys {
                let column = samples
                    .iter()
                    .map(|s| s.get(key).ok_or_else(|| missing(path, key)))
                    .collect::<Result<Vec<_>>>()?;
                let node = build_node(times, &column, builder, &path.key(key.as_str()))?;
                entries.push((key.clone(), node));
            }
            Ok(Node::Map(entries))
        }
    }
}

fn numeric_column(samples: &[&ValueTree], path: &TreePath) -> Result<Vec<f64>> {
    samples
        .iter()
        .enumerate()
        .map(|(k, s)| {
            s.as_f64().ok_or_else(|| {
                MorphError::invalid_samples(format!(
                    "expected number at {path} in keyframe {k}, found {}",
                    s.kind().name()
                ))
            })
        })
        .collect()
}

fn missing(path: &TreePath, what: &str) -> MorphError {
    MorphError::invalid_samples(format!("missing '{what}' under {path}"))
}
