//! Dot-delimited paths into nested object structure.
//!
//! A path is a sequence of string key segments, serialized as a single
//! string joined by `.` (e.g. `"user.address.city"`). There is no escaping
//! mechanism for keys containing a literal dot, and numeric segments are
//! ordinary string keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A path into a nested object structure.
///
/// Paths are immutable sequences of key segments. Use builder methods or
/// [`Path::parse`] to construct them.
///
/// # Examples
///
/// ```
/// use dotstate::Path;
///
/// let path = Path::parse("user.address.city");
/// assert_eq!(path.len(), 3);
/// assert_eq!(path, Path::root().key("user").key("address").key("city"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Path(Vec<String>);

impl Path {
    /// Create an empty path (root).
    #[inline]
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Create an empty path (alias for `new`).
    #[inline]
    pub fn root() -> Self {
        Self::new()
    }

    /// Create a path from a vector of segments.
    #[inline]
    pub fn from_segments(segments: Vec<String>) -> Self {
        Self(segments)
    }

    /// Parse a dot-delimited path string.
    ///
    /// The empty string parses to the root path. Empty segments produced by
    /// stray dots are skipped.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self(
            path.split('.')
                .filter(|segment| !segment.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Append a key segment and return self (builder pattern).
    #[inline]
    pub fn key(mut self, k: impl Into<String>) -> Self {
        self.0.push(k.into());
        self
    }

    /// Push a key segment onto the path (mutating).
    #[inline]
    pub fn push(&mut self, k: impl Into<String>) {
        self.0.push(k.into());
    }

    /// Pop the last segment from the path.
    #[inline]
    pub fn pop(&mut self) -> Option<String> {
        self.0.pop()
    }

    /// Get the segments of this path.
    #[inline]
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// Check if this path is empty (root).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of segments in this path.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Get the first segment.
    #[inline]
    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    /// Get the last segment.
    #[inline]
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Join this path with another path.
    #[inline]
    pub fn join(&self, other: &Path) -> Path {
        let mut result = self.clone();
        result.0.extend(other.0.iter().cloned());
        result
    }

    /// Get the parent path (path without the last segment).
    #[inline]
    pub fn parent(&self) -> Option<Path> {
        if self.0.is_empty() {
            None
        } else {
            let mut p = self.clone();
            p.pop();
            Some(p)
        }
    }

    /// Check if this path is a prefix of another path.
    ///
    /// A path is a prefix of another if all of its segments match the
    /// beginning of the other path's segments. A path is a prefix of itself.
    #[inline]
    pub fn is_prefix_of(&self, other: &Path) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.0.iter().zip(other.0.iter()).all(|(a, b)| a == b)
    }

    /// Iterate over the segments.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for segment in &self.0 {
            write!(f, ".{}", segment)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Path {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Path::parse(s))
    }
}

impl From<&str> for Path {
    fn from(s: &str) -> Self {
        Path::parse(s)
    }
}

impl From<String> for Path {
    fn from(s: String) -> Self {
        Path::parse(&s)
    }
}

impl FromIterator<String> for Path {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl std::ops::Index<usize> for Path {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Construct a [`Path`] from a sequence of key segments.
///
/// # Examples
///
/// ```
/// use dotstate::path;
///
/// let p = path!("users", "alice", "email");
/// assert_eq!(p.len(), 3);
///
/// let empty = path!();
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! path {
    () => {
        $crate::Path::root()
    };
    ($($seg:expr),+ $(,)?) => {{
        let mut p = $crate::Path::root();
        $(
            p.push($seg);
        )+
        p
    }};
}
