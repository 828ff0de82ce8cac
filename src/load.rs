//! Configuration file ingestion.
//!
//! Persisted or hand-authored configurations enter here: the file is read
//! and parsed by extension, the migration pipeline brings the tree to the
//! current schema, and the validator checks it before the tree is handed
//! onward.

use std::{fs, path::Path};

use anyhow::{Context, bail};
use log::debug;
use serde_json::Value;

use crate::{
    migrate::{migrate_config, migrate_icon},
    validate::Validator,
};

/// Read a configuration file, migrate it to the current schema, and
/// validate the result.
///
/// Supports `.json` and `.toml` files; TOML is converted through a JSON
/// value so the rest of the engine sees one tree representation.
///
/// # Errors
///
/// Returns errors on I/O failure, parse failure, unsupported extensions,
/// and validation failure.
pub fn load_config(path: impl AsRef<Path>, validator: &dyn Validator) -> anyhow::Result<Value> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");
    let raw: Value = match ext {
        "json" => serde_json::from_str(&content)?,
        "toml" => {
            let value: toml::Value = toml::from_str(&content)?;
            serde_json::to_value(value)?
        }
        _ => {
            bail!("Unsupported config file extension: {ext:?}");
        }
    };

    let migrated = migrate_icon(&migrate_config(&raw));
    debug!("loaded {} and migrated to current schema", path.display());

    validator.validate(&migrated)?;
    Ok(migrated)
}
