//! Structural validation boundary.
//!
//! Validation proper lives outside this engine; the engine only needs a
//! collaborator it can hand a migrated or normalized tree to, with a
//! report-on-first-mismatch contract. [`SchemaValidator`] is the default
//! implementation, checking structure by deserializing into a typed
//! configuration. Validator failures are surfaced to the caller, never
//! swallowed.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use crate::card::GaugeCardConfig;

/// Error surfaced when a tree fails structural validation.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// The tree does not match the expected structure.
    #[error("configuration structure mismatch: {0}")]
    Structure(#[from] serde_json::Error),
}

/// Structural validation collaborator, called after migration and before
/// a tree is used.
pub trait Validator {
    /// Check the tree, reporting the first structural mismatch.
    fn validate(&self, tree: &Value) -> Result<(), ValidationError>;
}

/// Validator that checks structure by deserializing into `C`.
pub struct SchemaValidator<C> {
    _config: PhantomData<C>,
}

/// Validator for the current gauge card schema.
pub type GaugeValidator = SchemaValidator<GaugeCardConfig>;

impl<C> SchemaValidator<C> {
    /// Create a validator for the typed configuration `C`.
    pub fn new() -> Self {
        SchemaValidator {
            _config: PhantomData,
        }
    }
}

impl<C> Default for SchemaValidator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DeserializeOwned> Validator for SchemaValidator<C> {
    fn validate(&self, tree: &Value) -> Result<(), ValidationError> {
        serde_json::from_value::<C>(tree.clone())?;
        Ok(())
    }
}
