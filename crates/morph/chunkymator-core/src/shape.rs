//! Shape checking across a keyframe sequence of value trees.
//!
//! Two trees have the same shape when they agree on container kinds, map key
//! sets and tuple arity at every position, and their leaves share the same
//! basic kind. Leaf values are irrelevant. Lists are checked against their
//! first element; since shape equality is an equivalence relation this is the
//! same as checking every pair.

use crate::path::TreePath;
use crate::value::ValueTree;

/// First divergence found by [`find_shape_mismatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeMismatch {
    /// Index of the diverging tree within the checked list
    pub index: usize,
    pub path: TreePath,
    pub reason: String,
}

/// `true` when every tree in `trees` has the shape of the first one.
/// Empty and single-element lists trivially pass.
pub fn is_same_shape(trees: &[ValueTree]) -> bool {
    find_shape_mismatch(trees).is_none()
}

/// Locate the first tree (and the path inside it) that diverges from `trees[0]`.
pub fn find_shape_mismatch(trees: &[ValueTree]) -> Option<ShapeMismatch> {
    let (reference, rest) = trees.split_first()?;
    rest.iter().enumerate().find_map(|(i, tree)| {
        compare(reference, tree, &TreePath::root()).map(|(path, reason)| ShapeMismatch {
            index: i + 1,
            path,
            reason,
        })
    })
}

/// Pairwise comparison; returns the divergence path and a reason.
fn compare(a: &ValueTree, b: &ValueTree, path: &TreePath) -> Option<(TreePath, String)> {
    match (a, b) {
        (ValueTree::Map(ma), ValueTree::Map(mb)) => {
            if ma.len() != mb.len() {
                return Some((
                    path.clone(),
                    format!("expected {} keys, found {}", ma.len(), mb.len()),
                ));
            }
            let mut keys: Vec<&String> = ma.keys().collect();
            keys.sort();
            for key in keys {
                match mb.get(key) {
                    Some(vb) => {
                        if let Some(diff) = compare(&ma[key], vb, &path.key(key.as_str())) {
                            return Some(diff);
                        }
                    }
                    None => return Some((path.clone(), format!("missing key '{key}'"))),
                }
            }
            None
        }
        (ValueTree::Tuple(ta), ValueTree::Tuple(tb)) => {
            if ta.len() != tb.len() {
                return Some((
                    path.clone(),
                    format!("expected tuple of {} slots, found {}", ta.len(), tb.len()),
                ));
            }
            ta.iter()
                .zip(tb.iter())
                .enumerate()
                .find_map(|(i, (sa, sb))| compare(sa, sb, &path.index(i)))
        }
        _ if a.kind() == b.kind() => None,
        _ => Some((
            path.clone(),
            format!("expected {}, found {}", a.kind().name(), b.kind().name()),
        )),
    }
}
