//! Observable holder of the current root value.
//!
//! The controller depends only on the minimal [`ValueCell`] contract.
//! [`SharedCell`] is the default implementation: a `Mutex`-wrapped root
//! handle with subscriber callbacks invoked on every write.

use crate::Value;
use std::sync::{Arc, Mutex};

/// Minimal observable-cell contract the controller depends on.
///
/// `set` is expected to trigger whatever change notification the
/// implementation provides.
pub trait ValueCell {
    /// Get a handle to the current root.
    fn get(&self) -> Arc<Value>;

    /// Store a new root, notifying any observers.
    fn set(&self, value: Arc<Value>);
}

type Subscriber = Arc<dyn Fn(&Arc<Value>) + Send + Sync>;

/// Shared holder of the current root with change notification.
///
/// The root is stored as `Arc<Value>`, so handing out snapshots is cheap
/// and old roots stay valid for as long as any consumer holds them.
pub struct SharedCell {
    value: Mutex<Arc<Value>>,
    subscribers: Mutex<Vec<Subscriber>>,
}

impl SharedCell {
    /// Create a new cell with the given initial root.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: Mutex::new(Arc::new(value.into())),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Register a callback invoked with the new root after every write.
    ///
    /// Callbacks run synchronously on the writing thread and must not call
    /// back into the cell.
    pub fn subscribe(&self, f: impl Fn(&Arc<Value>) + Send + Sync + 'static) {
        self.subscribers.lock().unwrap().push(Arc::new(f));
    }

    /// Get a handle to the current root.
    #[inline]
    pub fn snapshot(&self) -> Arc<Value> {
        self.value.lock().unwrap().clone()
    }

    /// Consume the cell and return the current root.
    pub fn into_inner(self) -> Arc<Value> {
        self.value.into_inner().unwrap()
    }
}

impl ValueCell for SharedCell {
    fn get(&self) -> Arc<Value> {
        self.snapshot()
    }

    fn set(&self, value: Arc<Value>) {
        *self.value.lock().unwrap() = value.clone();
        // Snapshot the list so callbacks run without the lock held
        let subscribers: Vec<Subscriber> = self.subscribers.lock().unwrap().clone();
        for subscriber in &subscribers {
            subscriber(&value);
        }
    }
}

impl Default for SharedCell {
    fn default() -> Self {
        Self::new(Value::object())
    }
}

impl Clone for SharedCell {
    /// Clones the current root handle; subscribers are not carried over.
    fn clone(&self) -> Self {
        Self {
            value: Mutex::new(self.snapshot()),
            subscribers: Mutex::new(Vec::new()),
        }
    }
}

impl std::fmt::Debug for SharedCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SharedCell").field(&"<Value>").finish()
    }
}
