//! Post-edit cleanup enforcing cross-field consistency.
//!
//! Every interactive edit produces a raw tree from the form widget. Before
//! that tree is re-validated and re-rendered it passes through
//! [`normalize`], which applies a fixed battery of rules: form scratch
//! fields are folded into their feature records, values made stale by a
//! discriminator change are dropped, fields equal to their form default
//! disappear, and sections left empty are removed. Rule order matters
//! where one rule's output is another's input (folding must see the
//! scratch fields the default sweep would delete).

use log::debug;
use serde_json::{Map, Value};

use crate::{
    feature::{self, FeatureType},
    tree::{self, TreePath},
};

/// Form scratch fields at the tree root, folded into the feature record
/// with the matching tag.
const FOLD_RULES: &[(&str, FeatureType)] = &[
    ("fan_modes", FeatureType::ClimateFanModes),
    ("swing_modes", FeatureType::ClimateSwingModes),
    ("hvac_modes", FeatureType::ClimateHvacModes),
];

/// Mode features eligible to receive the shared `style` scratch field, in
/// lookup order.
const STYLE_TARGETS: &[FeatureType] = &[
    FeatureType::ClimateFanModes,
    FeatureType::ClimateSwingModes,
    FeatureType::ClimateHvacModes,
];

/// Sections whose `type` discriminator invalidates the paired `value`.
const DISCRIMINATED_SECTIONS: &[&str] = &["icon", "setpoint"];

/// Fields where an empty string is a meaningful override rather than
/// "unset", exempt from the default sweep.
const EMPTY_STRING_KEEP: &[&[&str]] = &[
    &["value_texts", "primary"],
    &["value_texts", "secondary"],
];

/// Clean up a freshly edited tree.
///
/// `previous` is the last committed tree, used to detect discriminator
/// changes. Copy-on-write: both inputs are left untouched.
pub fn normalize(edited: &Value, previous: &Value) -> Value {
    let current = fold_features(edited);
    let current = drop_stale_values(&current, previous);
    let current = sweep_defaults(&current);
    prune_empty_sections(&current)
}

/// Fold form scratch fields into their feature records, then drop them.
fn fold_features(tree: &Value) -> Value {
    let mut current = tree.clone();
    for (field, feature_type) in FOLD_RULES {
        fold_into_feature(&mut current, field, *feature_type);
    }
    if current.get("style").is_some() {
        let target = STYLE_TARGETS.iter().copied().find(|feature_type| {
            current
                .get("features")
                .and_then(Value::as_array)
                .is_some_and(|features| feature::has(features, *feature_type))
        });
        match target {
            Some(feature_type) => fold_into_feature(&mut current, "style", feature_type),
            None => drop_root_key(&mut current, "style"),
        }
    }
    current
}

fn fold_into_feature(tree: &mut Value, field: &str, feature_type: FeatureType) {
    let Some(scratch) = tree.get(field).cloned() else {
        return;
    };
    let folded = tree
        .get("features")
        .and_then(Value::as_array)
        .and_then(|features| {
            let target = feature::get(features, feature_type)?;
            let mut updated = target.clone();
            updated
                .as_object_mut()?
                .insert(field.to_string(), scratch.clone());
            Some(feature::upsert(features, updated))
        });
    if let Some(features) = folded {
        debug!("folding {field} into {} feature", feature_type.as_str());
        if let Some(map) = tree.as_object_mut() {
            map.insert("features".to_string(), Value::Array(features));
        }
    }
    // The scratch field goes away whether or not a feature received it.
    drop_root_key(tree, field);
}

fn drop_root_key(tree: &mut Value, key: &str) {
    if let Some(map) = tree.as_object_mut() {
        map.remove(key);
    }
}

/// Drop `value` fields whose sibling `type` discriminator changed since
/// the previously committed tree, for icons, setpoints and indicators.
fn drop_stale_values(edited: &Value, previous: &Value) -> Value {
    let mut current = edited.clone();
    for section in DISCRIMINATED_SECTIONS {
        let type_path = TreePath::from_segments([*section, "type"]);
        if tree::get(&current, &type_path) != tree::get(previous, &type_path) {
            let value_path = TreePath::from_segments([*section, "value"]);
            let (next, removed) = tree::delete(&current, &value_path);
            if removed {
                debug!("dropping stale {section}.value after type change");
            }
            current = next;
        }
    }

    let Some(indicators) = current.get("indicators").and_then(Value::as_array) else {
        return current;
    };
    let previous_indicators = previous.get("indicators").and_then(Value::as_array);
    let mut updated = indicators.to_vec();
    for (index, indicator) in updated.iter_mut().enumerate() {
        let previous_type = previous_indicators
            .and_then(|items| items.get(index))
            .and_then(|item| item.get("type"));
        let changed = indicator.get("type") != previous_type;
        if changed
            && let Some(map) = indicator.as_object_mut()
            && map.remove("value").is_some()
        {
            debug!("dropping stale indicators.{index}.value after type change");
        }
    }
    if let Some(map) = current.as_object_mut() {
        map.insert("indicators".to_string(), Value::Array(updated));
    }
    current
}

/// Delete fields equal to their form default (`""` or `false`), where
/// "unset" and "default" are indistinguishable. The value-text fields on
/// the exclusion list keep empty strings as meaningful overrides.
fn sweep_defaults(tree: &Value) -> Value {
    let mut path = Vec::new();
    sweep_value(tree, &mut path)
}

fn sweep_value(value: &Value, path: &mut Vec<String>) -> Value {
    match value {
        Value::Object(map) => {
            let mut swept = Map::new();
            for (key, child) in map {
                path.push(key.clone());
                if is_default_equivalent(child) && !is_preserved(path) {
                    debug!("dropping default-equivalent field {}", path.join("."));
                } else {
                    swept.insert(key.clone(), sweep_value(child, path));
                }
                path.pop();
            }
            Value::Object(swept)
        }
        Value::Array(items) => Value::Array(
            items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    path.push(index.to_string());
                    let swept = sweep_value(item, path);
                    path.pop();
                    swept
                })
                .collect(),
        ),
        other => other.clone(),
    }
}

fn is_default_equivalent(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        _ => false,
    }
}

fn is_preserved(path: &[String]) -> bool {
    EMPTY_STRING_KEEP.iter().any(|keep| {
        keep.len() == path.len() && keep.iter().zip(path).all(|(a, b)| a == b)
    })
}

/// Remove keys whose value is an empty tree, bottom-up so sections
/// emptied by earlier rules cascade away.
fn prune_empty_sections(tree: &Value) -> Value {
    match tree {
        Value::Object(map) => {
            let mut pruned = Map::new();
            for (key, child) in map {
                let child = prune_empty_sections(child);
                if child.as_object().is_some_and(Map::is_empty) {
                    debug!("removing empty section {key}");
                    continue;
                }
                pruned.insert(key.clone(), child);
            }
            Value::Object(pruned)
        }
        Value::Array(items) => {
            Value::Array(items.iter().map(prune_empty_sections).collect())
        }
        other => other.clone(),
    }
}
