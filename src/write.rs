//! Persistent path writes via the copy-spine algorithm.
//!
//! A write rebuilds only the chain of objects from the root down to the
//! target key. At each level the object's map is cloned shallowly, which
//! copies the `Arc` handles of all sibling subtrees; only the one child on
//! the path is replaced with a freshly built value. Everything off the
//! spine is shared by reference between the old and new root.

use crate::error::{StateError, StateResult};
use crate::value::{value_type_name, Map};
use crate::{Path, Value};
use std::sync::Arc;

/// Policy for intermediate path segments that do not resolve to an object.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMode {
    /// A missing, null, or non-object intermediate is replaced with an
    /// empty object and the write continues. A primitive sitting mid-path
    /// is silently discarded.
    #[default]
    Permissive,
    /// A missing intermediate is [`StateError::PathNotFound`]; a
    /// present-but-non-object intermediate is [`StateError::NotAnObject`].
    Strict,
}

/// Produce a new root with the value at `path` replaced.
///
/// The original root is never modified. Every object on the path from the
/// root to the target key is a fresh shallow copy; every subtree not on
/// that path keeps its `Arc` identity.
///
/// The empty path is rejected with [`StateError::EmptyPath`]: replacing the
/// whole root is not a path write.
///
/// # Examples
///
/// ```
/// use dotstate::{path, set_at_path, Value, WriteMode};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// let root = Value::from(json!({"a": {"b": {"c": 1}, "d": 2}}));
/// let next = set_at_path(&root, &path!("a", "b", "c"), Value::from(99), WriteMode::Permissive).unwrap();
///
/// assert_eq!(next.to_json(), json!({"a": {"b": {"c": 99}, "d": 2}}));
/// // the original is untouched
/// assert_eq!(root.to_json(), json!({"a": {"b": {"c": 1}, "d": 2}}));
/// // the sibling "d" is shared, not copied
/// assert!(Arc::ptr_eq(
///     root.get("a").unwrap().entry("d").unwrap(),
///     next.get("a").unwrap().entry("d").unwrap(),
/// ));
/// ```
pub fn set_at_path(
    root: &Value,
    path: &Path,
    value: Value,
    mode: WriteMode,
) -> StateResult<Value> {
    if path.is_empty() {
        return Err(StateError::EmptyPath);
    }
    write_spine(root, path.segments(), 0, value, mode)
}

/// Rebuild one level of the spine and recurse into the child on the path.
fn write_spine(
    current: &Value,
    segments: &[String],
    consumed: usize,
    value: Value,
    mode: WriteMode,
) -> StateResult<Value> {
    let key = &segments[consumed];

    // Shallow copy: sibling entries keep their Arc handles.
    let mut map = match current {
        Value::Object(map) => map.clone(),
        other => match mode {
            WriteMode::Permissive => Map::new(),
            WriteMode::Strict => {
                return Err(StateError::not_an_object(
                    Path::from_segments(segments[..consumed].to_vec()),
                    value_type_name(other),
                ));
            }
        },
    };

    if consumed + 1 == segments.len() {
        map.insert(key.clone(), Arc::new(value));
    } else {
        let child = match (map.get(key), mode) {
            (Some(child), _) => {
                write_spine(child.as_ref(), segments, consumed + 1, value, mode)?
            }
            (None, WriteMode::Permissive) => {
                write_spine(&Value::Null, segments, consumed + 1, value, mode)?
            }
            (None, WriteMode::Strict) => {
                return Err(StateError::path_not_found(Path::from_segments(
                    segments[..=consumed].to_vec(),
                )));
            }
        };
        map.insert(key.clone(), Arc::new(child));
    }

    Ok(Value::Object(map))
}
