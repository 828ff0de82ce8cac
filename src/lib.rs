//! # gaugecfg
//!
//! A path-mutation, versioned-migration and normalization engine for
//! gauge-card configuration trees.
//!
//! Configurations are loosely-typed, arbitrarily nested JSON trees
//! ([`serde_json::Value`]) addressed by dot-separated paths. This crate
//! provides the pure, copy-on-write core that reads, writes, moves and
//! deletes values inside such trees, rewrites configurations produced by
//! older schema versions into the current schema, classifies structurally
//! similar segment shapes, and cleans up trees after interactive edits.
//!
//! ## Features
//!
//! - Copy-on-write tree primitives: the input tree is never mutated, every
//!   call yields an independent result tree
//! - Deterministic success/failure signaling through return values, never
//!   through panics or exceptions
//! - An idempotent, ordered migration pipeline safe to re-apply
//! - Structural shape classification for segment lists (threshold-keyed,
//!   position-keyed, template, or absent)
//! - A post-edit normalizer enforcing cross-field consistency
//!
//! ## Quick Start
//!
//! ```rust
//! use gaugecfg::migrate::migrate_config;
//! use serde_json::json;
//!
//! let legacy = json!({
//!     "name": "Kitchen",
//!     "severity": { "green": 0, "red": 50 },
//! });
//!
//! let current = migrate_config(&legacy);
//! assert_eq!(current["titles"]["primary"], json!("Kitchen"));
//! assert!(current.get("severity").is_none());
//! assert!(current["segments"].is_array());
//! ```
//!
//! ## Modules
//!
//! - [`tree`] - Typed paths and copy-on-write tree mutation primitives
//! - [`segment`] - Segment shape classification and conversion
//! - [`migrate`] - Ordered schema migration pipeline
//! - [`feature`] - Type-discriminated feature block registry
//! - [`normalize`] - Post-edit cross-field cleanup
//! - [`card`] - Typed current-schema configuration structures
//! - [`validate`] - Structural validation boundary
//! - [`load`] - Configuration file ingestion workflow

/// Typed current-schema configuration structures.
pub mod card;

/// Lookup, insert and removal over type-discriminated feature blocks.
pub mod feature;

/// Configuration file ingestion: read, migrate, validate.
pub mod load;

/// Ordered schema migration pipeline.
pub mod migrate;

/// Post-edit cleanup enforcing cross-field consistency.
pub mod normalize;

/// Segment shape classification and conversion.
pub mod segment;

/// Typed paths and copy-on-write tree mutation primitives.
pub mod tree;

/// Structural validation boundary.
pub mod validate;

pub use card::GaugeCardConfig;
pub use serde_json::Value;
pub use tree::{PathError, TreePath};
