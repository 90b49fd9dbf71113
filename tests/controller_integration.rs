//! Integration tests for the controller over an observable cell.

use dotstate::{
    path, Mutation, SharedCell, StateController, Value, ValueCell, WriteMode,
};
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// The four mutation shapes
// ============================================================================

#[test]
fn test_replace_literal() {
    let state = StateController::new(Value::from(json!({"old": true})));
    state.apply(Mutation::replace(Value::from(json!({"new": true})))).unwrap();
    assert_eq!(state.current().to_json(), json!({"new": true}));
}

#[test]
fn test_replace_with_updater_on_scalar_root() {
    let state = StateController::new(5);
    state
        .apply(Mutation::replace_with(|old| {
            Value::from(old.as_i64().unwrap() * 2)
        }))
        .unwrap();
    assert_eq!(state.current().to_json(), json!(10));
}

#[test]
fn test_set_path_literal() {
    let state = StateController::new(Value::from(json!({"a": {"b": {"c": 1}, "d": 2}})));
    state.apply(Mutation::set(path!("a", "b", "c"), 99)).unwrap();
    assert_eq!(state.current().to_json(), json!({"a": {"b": {"c": 99}, "d": 2}}));
}

#[test]
fn test_update_path_with_updater() {
    let state = StateController::new(Value::from(json!({"count": 1})));
    state
        .apply(Mutation::update(path!("count"), |prev| {
            Value::from(prev.and_then(Value::as_i64).unwrap_or(0) + 1)
        }))
        .unwrap();
    assert_eq!(state.current().to_json(), json!({"count": 2}));
}

// ============================================================================
// Notification discipline
// ============================================================================

#[test]
fn test_exactly_one_cell_write_per_mutation() {
    let cell = SharedCell::new(Value::from(json!({"count": 0})));
    let writes = Arc::new(AtomicUsize::new(0));
    let counter = writes.clone();
    cell.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let state = StateController::with_cell(cell);
    state.replace(Value::from(json!({"count": 0}))).unwrap();
    state.set(path!("count"), 1).unwrap();
    state
        .update(path!("count"), |prev| {
            Value::from(prev.and_then(Value::as_i64).unwrap_or(0) + 1)
        })
        .unwrap();
    state.replace_with(|old| old.clone()).unwrap();

    assert_eq!(writes.load(Ordering::SeqCst), 4);
}

#[test]
fn test_failed_mutation_writes_nothing() {
    let cell = SharedCell::new(Value::from(json!({"leaf": 1})));
    let writes = Arc::new(AtomicUsize::new(0));
    let counter = writes.clone();
    cell.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let state = StateController::with_cell(cell).with_mode(WriteMode::Strict);
    assert!(state.set(path!("leaf", "nested"), 1).is_err());

    assert_eq!(writes.load(Ordering::SeqCst), 0);
    assert_eq!(state.current().to_json(), json!({"leaf": 1}));
}

#[test]
fn test_subscriber_observes_each_new_root() {
    let cell = SharedCell::new(Value::from(json!({"n": 0})));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    cell.subscribe(move |root| {
        sink.lock().unwrap().push(root.to_json());
    });

    let state = StateController::with_cell(cell);
    state.set(path!("n"), 1).unwrap();
    state.set(path!("n"), 2).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(*seen, vec![json!({"n": 1}), json!({"n": 2})]);
}

// ============================================================================
// Persistence and sharing through the controller
// ============================================================================

#[test]
fn test_old_roots_remain_valid_and_unchanged() {
    let state = StateController::new(Value::from(json!({"count": 1})));
    let v1 = state.current();
    state.set(path!("count"), 2).unwrap();
    let v2 = state.current();
    state.set(path!("count"), 3).unwrap();

    assert_eq!(v1.to_json(), json!({"count": 1}));
    assert_eq!(v2.to_json(), json!({"count": 2}));
    assert_eq!(state.current().to_json(), json!({"count": 3}));
}

#[test]
fn test_untouched_subtrees_shared_across_generations() {
    let state = StateController::new(Value::from(json!({
        "a": {"b": {"c": 1}, "d": [1, 2, 3]},
        "frozen": {"large": "payload"}
    })));
    let before = state.current();
    let after = state.set(path!("a", "b", "c"), 99).unwrap();

    assert!(Arc::ptr_eq(
        before.entry("frozen").unwrap(),
        after.entry("frozen").unwrap()
    ));
    assert!(Arc::ptr_eq(
        before.get("a").unwrap().entry("d").unwrap(),
        after.get("a").unwrap().entry("d").unwrap()
    ));
    assert!(!Arc::ptr_eq(
        before.entry("a").unwrap(),
        after.entry("a").unwrap()
    ));
}

// ============================================================================
// Updater semantics
// ============================================================================

#[test]
fn test_updater_distinguishes_absent_from_null() {
    let state = StateController::new(Value::from(json!({"present": null})));

    state
        .update(path!("present"), |prev| {
            assert_eq!(prev, Some(&Value::Null));
            Value::from("was null")
        })
        .unwrap();

    state
        .update(path!("absent"), |prev| {
            assert!(prev.is_none());
            Value::from("was missing")
        })
        .unwrap();

    assert_eq!(state.read("present"), Some(Value::from("was null")));
    assert_eq!(state.read("absent"), Some(Value::from("was missing")));
}

#[test]
fn test_sequential_updates_compose() {
    let state = StateController::new(Value::from(json!({"count": 0})));
    for _ in 0..5 {
        state
            .update(path!("count"), |prev| {
                Value::from(prev.and_then(Value::as_i64).unwrap_or(0) + 1)
            })
            .unwrap();
    }
    assert_eq!(state.read("count"), Some(Value::from(5)));
}

// ============================================================================
// Custom cell implementations
// ============================================================================

/// A cell that records every write, standing in for a host-supplied one.
struct RecordingCell {
    value: Mutex<Arc<Value>>,
    log: Mutex<Vec<serde_json::Value>>,
}

impl RecordingCell {
    fn new(initial: Value) -> Self {
        Self {
            value: Mutex::new(Arc::new(initial)),
            log: Mutex::new(Vec::new()),
        }
    }
}

impl ValueCell for RecordingCell {
    fn get(&self) -> Arc<Value> {
        self.value.lock().unwrap().clone()
    }

    fn set(&self, value: Arc<Value>) {
        self.log.lock().unwrap().push(value.to_json());
        *self.value.lock().unwrap() = value;
    }
}

#[test]
fn test_controller_over_custom_cell() {
    let state = StateController::with_cell(RecordingCell::new(Value::from(json!({"x": 1}))));
    state.set(path!("x"), 2).unwrap();
    state.set(path!("y"), 3).unwrap();

    let log = state.cell().log.lock().unwrap();
    assert_eq!(*log, vec![json!({"x": 2}), json!({"x": 2, "y": 3})]);
}
