//! Stateful orchestrator applying mutations to an observable cell.

use crate::cell::{SharedCell, ValueCell};
use crate::error::StateResult;
use crate::read::get_at_path;
use crate::write::{set_at_path, WriteMode};
use crate::{Mutation, Path, Value};
use std::sync::Arc;
use tracing::debug;

/// Holds the current root in a [`ValueCell`] and applies [`Mutation`]s.
///
/// Each [`apply`](StateController::apply) is a single synchronous
/// read-compute-write: the current root is read from the cell, the new root
/// is computed as a pure function of it, and exactly one cell write stores
/// the result. A failed write stores nothing.
///
/// The controller performs no locking of its own around that sequence. In a
/// single-threaded host this is race-free by construction; callers invoking
/// `apply` from multiple threads must serialize the calls externally to keep
/// the read-modify-write atomic.
pub struct StateController<C = SharedCell> {
    cell: C,
    mode: WriteMode,
}

impl StateController<SharedCell> {
    /// Create a controller owning a [`SharedCell`] with the given initial
    /// root, in permissive mode.
    pub fn new(initial: impl Into<Value>) -> Self {
        Self::with_cell(SharedCell::new(initial))
    }
}

impl<C: ValueCell> StateController<C> {
    /// Create a controller over an existing cell, in permissive mode.
    pub fn with_cell(cell: C) -> Self {
        Self {
            cell,
            mode: WriteMode::default(),
        }
    }

    /// Set the write mode for path mutations.
    pub fn with_mode(mut self, mode: WriteMode) -> Self {
        self.mode = mode;
        self
    }

    /// The write mode path mutations run under.
    #[inline]
    pub fn mode(&self) -> WriteMode {
        self.mode
    }

    /// The underlying cell.
    #[inline]
    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// Get a handle to the current root.
    #[inline]
    pub fn current(&self) -> Arc<Value> {
        self.cell.get()
    }

    /// Resolve a path against the current root, cloning the value found.
    ///
    /// Returns `None` when the path does not resolve; a stored null comes
    /// back as `Some(Value::Null)`.
    pub fn read(&self, path: impl Into<Path>) -> Option<Value> {
        let root = self.cell.get();
        get_at_path(&root, &path.into()).cloned()
    }

    /// Apply a mutation and return the new root.
    ///
    /// Performs exactly one cell write on success and none on error.
    pub fn apply(&self, mutation: Mutation) -> StateResult<Arc<Value>> {
        debug!(op = mutation.name(), path = ?mutation.path(), "applying mutation");

        let next = match mutation {
            Mutation::Replace(value) => Arc::new(value),
            Mutation::ReplaceWith(f) => {
                let old = self.cell.get();
                Arc::new(f(&old))
            }
            Mutation::Set(path, value) => {
                let old = self.cell.get();
                Arc::new(set_at_path(&old, &path, value, self.mode)?)
            }
            Mutation::Update(path, f) => {
                let old = self.cell.get();
                let value = f(get_at_path(&old, &path));
                Arc::new(set_at_path(&old, &path, value, self.mode)?)
            }
        };

        self.cell.set(next.clone());
        Ok(next)
    }

    /// Replace the whole root with a literal value.
    pub fn replace(&self, value: impl Into<Value>) -> StateResult<Arc<Value>> {
        self.apply(Mutation::replace(value))
    }

    /// Replace the whole root with a function of the current root.
    pub fn replace_with(
        &self,
        f: impl FnOnce(&Value) -> Value + Send + 'static,
    ) -> StateResult<Arc<Value>> {
        self.apply(Mutation::replace_with(f))
    }

    /// Replace the value at a path with a literal value.
    pub fn set(
        &self,
        path: impl Into<Path>,
        value: impl Into<Value>,
    ) -> StateResult<Arc<Value>> {
        self.apply(Mutation::set(path, value))
    }

    /// Replace the value at a path with a function of the current value
    /// at that path.
    pub fn update(
        &self,
        path: impl Into<Path>,
        f: impl FnOnce(Option<&Value>) -> Value + Send + 'static,
    ) -> StateResult<Arc<Value>> {
        self.apply(Mutation::update(path, f))
    }
}

impl<C: ValueCell + std::fmt::Debug> std::fmt::Debug for StateController<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateController")
            .field("cell", &self.cell)
            .field("mode", &self.mode)
            .finish()
    }
}
