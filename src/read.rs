//! Path resolution against a root value.

use crate::{Path, Value};

/// Resolve a path against a root value.
///
/// Returns `None` as soon as any segment is missing or an intermediate value
/// is not an object; later segments are never inspected. A stored null at
/// the path returns `Some(&Value::Null)`, which is distinct from absence.
/// The empty path resolves to the root itself.
///
/// # Examples
///
/// ```
/// use dotstate::{get_at_path, path, Value};
/// use serde_json::json;
///
/// let root = Value::from(json!({"a": {"b": null}}));
/// assert_eq!(get_at_path(&root, &path!("a", "b")), Some(&Value::Null));
/// assert_eq!(get_at_path(&root, &path!("a", "c")), None);
/// assert_eq!(get_at_path(&root, &path!()), Some(&root));
/// ```
pub fn get_at_path<'a>(root: &'a Value, path: &Path) -> Option<&'a Value> {
    let mut current = root;
    for key in path.iter() {
        current = current.get(key)?;
    }
    Some(current)
}
