//! Value trees: the nested per-keyframe parameter data that gets interpolated.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Coarse kind of a [`ValueTree`] node, used for shape comparison and
/// leaf policy dispatch.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Integer or real scalar
    Number,
    /// Opaque string tag, never interpolated
    Text,
    /// Opaque boolean tag, never interpolated
    Flag,
    Tuple,
    Map,
}

impl ValueKind {
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Number => "number",
            ValueKind::Text => "text",
            ValueKind::Flag => "flag",
            ValueKind::Tuple => "tuple",
            ValueKind::Map => "map",
        }
    }

    /// Leaves are every kind that is not a container.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        !matches!(self, ValueKind::Tuple | ValueKind::Map)
    }
}

/// Recursive parameter value sampled once per keyframe.
///
/// `Int` and `Real` share the [`ValueKind::Number`] shape, so a leaf may mix
/// them across keyframes; an all-`Int` leaf interpolates to `Int` results.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ValueTree {
    Int(i64),
    Real(f64),
    Flag(bool),
    Text(String),
    /// Fixed-arity tuple, interpolated slot by slot
    Tuple(Vec<ValueTree>),
    /// Mapping whose key set is part of the shape
    Map(HashMap<String, ValueTree>),
}

impl ValueTree {
    /// Return the coarse kind of this value.
    #[inline]
    pub fn kind(&self) -> ValueKind {
        match self {
            ValueTree::Int(_) | ValueTree::Real(_) => ValueKind::Number,
            ValueTree::Text(_) => ValueKind::Text,
            ValueTree::Flag(_) => ValueKind::Flag,
            ValueTree::Tuple(_) => ValueKind::Tuple,
            ValueTree::Map(_) => ValueKind::Map,
        }
    }

    /// Numeric leaves as f64; `None` for every other kind.
    #[inline]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ValueTree::Int(i) => Some(*i as f64),
            ValueTree::Real(r) => Some(*r),
            _ => None,
        }
    }

    #[inline]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ValueTree::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    pub fn is_int(&self) -> bool {
        matches!(self, ValueTree::Int(_))
    }

    /// Look up a key of a `Map` node.
    pub fn get(&self, key: &str) -> Option<&ValueTree> {
        match self {
            ValueTree::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Look up a slot of a `Tuple` node.
    pub fn slot(&self, index: usize) -> Option<&ValueTree> {
        match self {
            ValueTree::Tuple(items) => items.get(index),
            _ => None,
        }
    }

    /// Build a `Map` node from (key, value) pairs.
    pub fn map_from_pairs(
        pairs: impl IntoIterator<Item = (impl Into<String>, ValueTree)>,
    ) -> Self {
        ValueTree::Map(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            ValueTree::Tuple(items) => items.iter().map(ValueTree::leaf_count).sum(),
            ValueTree::Map(map) => map.values().map(ValueTree::leaf_count).sum(),
            _ => 1,
        }
    }
}

impl From<i64> for ValueTree {
    fn from(v: i64) -> Self {
        ValueTree::Int(v)
    }
}

impl From<f64> for ValueTree {
    fn from(v: f64) -> Self {
        ValueTree::Real(v)
    }
}

impl From<bool> for ValueTree {
    fn from(v: bool) -> Self {
        ValueTree::Flag(v)
    }
}

impl From<&str> for ValueTree {
    fn from(v: &str) -> Self {
        ValueTree::Text(v.to_string())
    }
}

impl From<String> for ValueTree {
    fn from(v: String) -> Self {
        ValueTree::Text(v)
    }
}

impl From<Vec<ValueTree>> for ValueTree {
    fn from(items: Vec<ValueTree>) -> Self {
        ValueTree::Tuple(items)
    }
}
