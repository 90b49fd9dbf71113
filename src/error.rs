//! Error types for dotstate operations.

use crate::Path;
use thiserror::Error;

/// Result type alias for dotstate operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur during path writes.
///
/// Reads never fail; absence is reported as `None`. Writes fail only on an
/// empty path, or in strict mode when the path traverses missing or
/// non-object structure.
#[derive(Debug, Error)]
pub enum StateError {
    /// A path write was attempted with an empty path.
    ///
    /// Whole-root replacement is a separate operation
    /// ([`Mutation::Replace`](crate::Mutation::Replace)), not a path write.
    #[error("empty path: whole-root replacement is not a path write")]
    EmptyPath,

    /// An intermediate segment does not exist (strict mode only).
    #[error("path not found: {path}")]
    PathNotFound {
        /// The longest resolvable prefix plus the missing segment.
        path: Path,
    },

    /// An intermediate value is not an object (strict mode only).
    #[error("expected object at {path}, found {found}")]
    NotAnObject {
        /// The path to the offending value.
        path: Path,
        /// The type actually found there.
        found: &'static str,
    },
}

impl StateError {
    /// Create a path not found error.
    #[inline]
    pub fn path_not_found(path: Path) -> Self {
        StateError::PathNotFound { path }
    }

    /// Create a not-an-object error.
    #[inline]
    pub fn not_an_object(path: Path, found: &'static str) -> Self {
        StateError::NotAnObject { path, found }
    }
}
