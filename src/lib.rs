//! Path-addressed persistent updates for nested JSON-like state.
//!
//! `dotstate` provides two pure functions — a path reader and a copy-spine
//! path writer — and a thin controller that holds the current root in an
//! observable cell and applies tagged mutations to it.
//!
//! # Core Concepts
//!
//! - **Value**: JSON-like tree whose containers share children behind `Arc`
//! - **Path**: dot-delimited key sequence (`"user.address.city"`)
//! - **get_at_path**: resolve a path, `None` on any missing segment
//! - **set_at_path**: build a new root with one value replaced, sharing
//!   every subtree off the copied spine
//! - **Mutation**: closed sum of the four mutation shapes
//! - **StateController**: reads the cell, computes the new root, writes it
//!   back — exactly one cell write per mutation
//!
//! # Persistent Updates
//!
//! ```text
//! root' = set_at_path(root, path, value)
//! ```
//!
//! - `set_at_path` is pure and never mutates its input
//! - only the containers on the path are copied; siblings keep their
//!   `Arc` identity, so consumers can change-detect by pointer
//!
//! # Quick Start
//!
//! ```
//! use dotstate::{get_at_path, path, set_at_path, Value, WriteMode};
//! use serde_json::json;
//! use std::sync::Arc;
//!
//! let root = Value::from(json!({"a": {"b": {"c": 1}, "d": 2}}));
//! let next = set_at_path(&root, &path!("a", "b", "c"), Value::from(99), WriteMode::Permissive)
//!     .unwrap();
//!
//! assert_eq!(next.to_json(), json!({"a": {"b": {"c": 99}, "d": 2}}));
//! assert_eq!(root.to_json(), json!({"a": {"b": {"c": 1}, "d": 2}})); // unchanged
//!
//! // the untouched sibling is shared, not copied
//! assert!(Arc::ptr_eq(
//!     root.get("a").unwrap().entry("d").unwrap(),
//!     next.get("a").unwrap().entry("d").unwrap(),
//! ));
//! ```
//!
//! # Using the controller
//!
//! ```
//! use dotstate::{path, StateController, Value};
//! use serde_json::json;
//!
//! let state = StateController::new(Value::from(json!({
//!     "count": 0,
//!     "user": { "address": { "city": "London" } }
//! })));
//!
//! // path + literal
//! state.set("user.address.city", "Paris").unwrap();
//!
//! // path + updater (receives None when the path is absent)
//! state.update(path!("count"), |old| {
//!     Value::from(old.and_then(Value::as_i64).unwrap_or(0) + 1)
//! }).unwrap();
//!
//! assert_eq!(state.read("count"), Some(Value::from(1)));
//! assert_eq!(state.read("user.address.city"), Some(Value::from("Paris")));
//! ```

mod cell;
mod controller;
mod error;
mod mutation;
mod path;
mod read;
mod value;
mod write;

// Core types
pub use error::{StateError, StateResult};
pub use path::Path;
pub use value::{value_type_name, Map, Value};

// Pure operations
pub use read::get_at_path;
pub use write::{set_at_path, WriteMode};

// Controller surface
pub use cell::{SharedCell, ValueCell};
pub use controller::StateController;
pub use mutation::{Mutation, ReplaceFn, UpdateFn};
