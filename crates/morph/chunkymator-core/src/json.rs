//! Bridge between scene JSON and [`ValueTree`].
//!
//! Mapping:
//! - integer numbers -> `Int`, other numbers -> `Real`
//! - strings -> `Text`, booleans -> `Flag`
//! - arrays -> `Tuple`, objects -> `Map`
//! - `null` has no value-tree counterpart and is rejected with its path.

use hashbrown::HashMap;
use serde_json::{Map, Number, Value as JsonValue};

use crate::error::{MorphError, Result};
use crate::path::TreePath;
use crate::value::ValueTree;

impl ValueTree {
    /// Convert scene JSON into a value tree, failing on `null` leaves.
    pub fn from_json(value: &JsonValue) -> Result<Self> {
        from_json_at(value, &TreePath::root())
    }

    /// Convert back to JSON. Non-finite reals become `null`.
    pub fn to_json(&self) -> JsonValue {
        match self {
            ValueTree::Int(i) => JsonValue::Number((*i).into()),
            ValueTree::Real(r) => Number::from_f64(*r)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            ValueTree::Flag(b) => JsonValue::Bool(*b),
            ValueTree::Text(s) => JsonValue::String(s.clone()),
            ValueTree::Tuple(items) => {
                JsonValue::Array(items.iter().map(ValueTree::to_json).collect())
            }
            ValueTree::Map(map) => {
                let mut out = Map::new();
                for (k, v) in map {
                    out.insert(k.clone(), v.to_json());
                }
                JsonValue::Object(out)
            }
        }
    }
}

fn from_json_at(value: &JsonValue, path: &TreePath) -> Result<ValueTree> {
    match value {
        JsonValue::Null => Err(MorphError::UnsupportedLeaf {
            path: path.to_string(),
            kind: "null".to_string(),
        }),
        JsonValue::Bool(b) => Ok(ValueTree::Flag(*b)),
        JsonValue::Number(n) => number(n, path),
        JsonValue::String(s) => Ok(ValueTree::Text(s.clone())),
        JsonValue::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| from_json_at(item, &path.index(i)))
            .collect::<Result<Vec<_>>>()
            .map(ValueTree::Tuple),
        JsonValue::Object(obj) => obj
            .iter()
            .map(|(k, v)| from_json_at(v, &path.key(k.as_str())).map(|t| (k.clone(), t)))
            .collect::<Result<HashMap<_, _>>>()
            .map(ValueTree::Map),
    }
}

fn number(n: &Number, path: &TreePath) -> Result<ValueTree> {
    if let Some(i) = n.as_i64() {
        return Ok(ValueTree::Int(i));
    }
    n.as_f64()
        .map(ValueTree::Real)
        .ok_or_else(|| MorphError::UnsupportedLeaf {
            path: path.to_string(),
            kind: format!("number {n}"),
        })
}
