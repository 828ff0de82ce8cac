//! Typed paths and copy-on-write mutation primitives for configuration trees.
//!
//! A configuration tree is a [`serde_json::Value`]: string keys mapping to
//! scalars, nested trees, or sequences. Locations inside a tree are
//! addressed by a parsed [`TreePath`].
//!
//! Every mutating operation here is copy-on-write: the caller's tree is
//! observably unchanged after any call, and failures are reported through
//! ordinary return values rather than panics.
//!
//! ## Modules
//!
//! - [`path`] - Parsed and validated dot-separated paths
//! - [`mutate`] - get/set/delete/move over a tree

/// Copy-on-write get/set/delete/move operations.
pub mod mutate;

/// Parsed dot-separated path type.
pub mod path;

pub use mutate::{delete, get, move_value, set};
pub use path::{PathError, TreePath};
