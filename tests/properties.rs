//! Property tests for the reader/writer algebra.

use dotstate::{get_at_path, set_at_path, Path, StateError, Value, WriteMode};
use proptest::prelude::*;
use std::sync::Arc;

fn leaf() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::from),
    ]
}

/// Nested object trees a few levels deep, with keys drawn from a small
/// alphabet so generated paths sometimes hit existing structure.
fn tree() -> impl Strategy<Value = Value> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        prop::collection::btree_map("[a-e]", inner.prop_map(Arc::new), 0..4)
            .prop_map(Value::Object)
    })
}

fn any_path() -> impl Strategy<Value = Path> {
    prop::collection::vec("[a-e]", 1..4).prop_map(Path::from_segments)
}

proptest! {
    /// Writing a value and reading it back through the same path yields
    /// the written value.
    #[test]
    fn roundtrip_read_after_write(root in tree(), path in any_path(), value in leaf()) {
        let next = set_at_path(&root, &path, value.clone(), WriteMode::Permissive).unwrap();
        prop_assert_eq!(get_at_path(&next, &path), Some(&value));
    }

    /// Writes never alter the original root.
    #[test]
    fn write_never_mutates_input(root in tree(), path in any_path(), value in leaf()) {
        let snapshot = root.to_json();
        let _ = set_at_path(&root, &path, value, WriteMode::Permissive).unwrap();
        prop_assert_eq!(root.to_json(), snapshot);
    }

    /// Every top-level subtree off the written path keeps its identity.
    #[test]
    fn write_shares_untouched_siblings(root in tree(), path in any_path(), value in leaf()) {
        let next = set_at_path(&root, &path, value, WriteMode::Permissive).unwrap();
        if let Some(map) = root.as_object() {
            for key in map.keys() {
                if Some(key.as_str()) != path.first() {
                    prop_assert!(Arc::ptr_eq(
                        root.entry(key).unwrap(),
                        next.entry(key).unwrap(),
                    ));
                }
            }
        }
    }

    /// Reads are total: any path against any root resolves or is absent,
    /// never a panic.
    #[test]
    fn read_is_total(root in tree(), path in any_path()) {
        let _ = get_at_path(&root, &path);
    }

    /// The empty path always resolves to the root itself.
    #[test]
    fn empty_path_reads_root(root in tree()) {
        prop_assert_eq!(get_at_path(&root, &Path::root()), Some(&root));
    }

    /// Strict mode either succeeds with the same roundtrip guarantee or
    /// fails with one of its two typed errors, leaving no other outcomes.
    #[test]
    fn strict_mode_is_typed(root in tree(), path in any_path(), value in leaf()) {
        match set_at_path(&root, &path, value.clone(), WriteMode::Strict) {
            Ok(next) => prop_assert_eq!(get_at_path(&next, &path), Some(&value)),
            Err(StateError::PathNotFound { .. }) | Err(StateError::NotAnObject { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }

    /// Writing the value read from an existing path produces an equal root.
    #[test]
    fn rewrite_of_existing_value_is_identity(root in tree(), path in any_path()) {
        if let Some(existing) = get_at_path(&root, &path) {
            let existing = existing.clone();
            let next = set_at_path(&root, &path, existing, WriteMode::Permissive).unwrap();
            prop_assert_eq!(next.to_json(), root.to_json());
        }
    }
}
