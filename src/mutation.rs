//! Tagged mutation variants for the state controller.
//!
//! Each variant describes a single change to the current root. The four
//! cases are resolved at the call site, so dispatch is exhaustive and
//! statically checked.

use crate::{Path, Value};
use std::fmt;

/// Updater applied to the current value at a path.
///
/// Receives `None` when the path does not resolve, which is distinct from
/// a stored `Value::Null`.
pub type UpdateFn = Box<dyn FnOnce(Option<&Value>) -> Value + Send>;

/// Updater applied to the whole current root.
pub type ReplaceFn = Box<dyn FnOnce(&Value) -> Value + Send>;

/// A single mutation of the managed root value.
pub enum Mutation {
    /// Replace the whole root with a literal value.
    Replace(Value),
    /// Replace the whole root with a function of the current root.
    ReplaceWith(ReplaceFn),
    /// Replace the value at a path with a literal value.
    Set(Path, Value),
    /// Replace the value at a path with a function of the current value
    /// at that path.
    Update(Path, UpdateFn),
}

impl Mutation {
    /// Create a whole-root literal replacement.
    #[inline]
    pub fn replace(value: impl Into<Value>) -> Self {
        Mutation::Replace(value.into())
    }

    /// Create a whole-root updater replacement.
    #[inline]
    pub fn replace_with(f: impl FnOnce(&Value) -> Value + Send + 'static) -> Self {
        Mutation::ReplaceWith(Box::new(f))
    }

    /// Create a path literal write.
    #[inline]
    pub fn set(path: impl Into<Path>, value: impl Into<Value>) -> Self {
        Mutation::Set(path.into(), value.into())
    }

    /// Create a path updater write.
    #[inline]
    pub fn update(
        path: impl Into<Path>,
        f: impl FnOnce(Option<&Value>) -> Value + Send + 'static,
    ) -> Self {
        Mutation::Update(path.into(), Box::new(f))
    }

    /// Get the path this mutation targets, if it is path-addressed.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Mutation::Replace(_) | Mutation::ReplaceWith(_) => None,
            Mutation::Set(path, _) => Some(path),
            Mutation::Update(path, _) => Some(path),
        }
    }

    /// Get the mutation name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::Replace(_) => "replace",
            Mutation::ReplaceWith(_) => "replace_with",
            Mutation::Set(..) => "set",
            Mutation::Update(..) => "update",
        }
    }
}

impl fmt::Debug for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mutation::Replace(value) => f.debug_tuple("Replace").field(value).finish(),
            Mutation::ReplaceWith(_) => f.debug_tuple("ReplaceWith").field(&"<fn>").finish(),
            Mutation::Set(path, value) => {
                f.debug_tuple("Set").field(path).field(value).finish()
            }
            Mutation::Update(path, _) => {
                f.debug_tuple("Update").field(path).field(&"<fn>").finish()
            }
        }
    }
}
