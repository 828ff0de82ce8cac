//! Lookup, insert and removal over type-discriminated feature blocks.
//!
//! Features are optional configuration blocks stored as a sequence under
//! the `features` key, each discriminated by a `type` tag. A valid tree
//! has at most one feature per type, but the registry does not enforce
//! that; lookups take the first match and removal filters all matches.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Type tag of an optional card feature block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureType {
    /// Temperature adjustment controls.
    AdjustTemperature,
    /// Climate fan mode selector.
    ClimateFanModes,
    /// Climate HVAC mode selector.
    ClimateHvacModes,
    /// Climate state overview.
    ClimateOverview,
    /// Climate swing mode selector.
    ClimateSwingModes,
}

impl FeatureType {
    /// The external tag string stored in the tree.
    pub fn as_str(&self) -> &'static str {
        match self {
            FeatureType::AdjustTemperature => "adjust-temperature",
            FeatureType::ClimateFanModes => "climate-fan-modes",
            FeatureType::ClimateHvacModes => "climate-hvac-modes",
            FeatureType::ClimateOverview => "climate-overview",
            FeatureType::ClimateSwingModes => "climate-swing-modes",
        }
    }

    /// Parse an external tag string.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "adjust-temperature" => Some(FeatureType::AdjustTemperature),
            "climate-fan-modes" => Some(FeatureType::ClimateFanModes),
            "climate-hvac-modes" => Some(FeatureType::ClimateHvacModes),
            "climate-overview" => Some(FeatureType::ClimateOverview),
            "climate-swing-modes" => Some(FeatureType::ClimateSwingModes),
            _ => None,
        }
    }
}

fn tag_of(feature: &Value) -> Option<&str> {
    feature.get("type").and_then(Value::as_str)
}

/// Whether a feature with the given type is present.
pub fn has(features: &[Value], feature_type: FeatureType) -> bool {
    get(features, feature_type).is_some()
}

/// The first feature with the given type, if any.
pub fn get(features: &[Value], feature_type: FeatureType) -> Option<&Value> {
    features
        .iter()
        .find(|feature| tag_of(feature) == Some(feature_type.as_str()))
}

/// A copy of the list with every feature of the given type removed.
pub fn remove(features: &[Value], feature_type: FeatureType) -> Vec<Value> {
    features
        .iter()
        .filter(|feature| tag_of(feature) != Some(feature_type.as_str()))
        .cloned()
        .collect()
}

/// A copy of the list with `feature` replacing the first entry carrying
/// the same `type` tag, or appended when no entry matches.
pub fn upsert(features: &[Value], feature: Value) -> Vec<Value> {
    let mut updated = features.to_vec();
    let position = tag_of(&feature).and_then(|tag| {
        updated
            .iter()
            .position(|existing| tag_of(existing) == Some(tag))
    });
    match position {
        Some(index) => updated[index] = feature,
        None => updated.push(feature),
    }
    updated
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Value> {
        vec![
            json!({ "type": "climate-fan-modes", "fan_modes": ["low"] }),
            json!({ "type": "adjust-temperature" }),
        ]
    }

    #[test]
    fn test_tag_round_trip() {
        for feature_type in [
            FeatureType::AdjustTemperature,
            FeatureType::ClimateFanModes,
            FeatureType::ClimateHvacModes,
            FeatureType::ClimateOverview,
            FeatureType::ClimateSwingModes,
        ] {
            assert_eq!(FeatureType::from_tag(feature_type.as_str()), Some(feature_type));
            assert_eq!(
                serde_json::to_value(feature_type).unwrap(),
                json!(feature_type.as_str())
            );
        }
        assert_eq!(FeatureType::from_tag("unknown"), None);
    }

    #[test]
    fn test_has_and_get() {
        let features = sample();
        assert!(has(&features, FeatureType::ClimateFanModes));
        assert!(!has(&features, FeatureType::ClimateOverview));
        assert_eq!(
            get(&features, FeatureType::ClimateFanModes),
            Some(&json!({ "type": "climate-fan-modes", "fan_modes": ["low"] }))
        );
        assert_eq!(get(&features, FeatureType::ClimateSwingModes), None);
    }

    #[test]
    fn test_get_takes_first_match() {
        let features = vec![
            json!({ "type": "climate-overview", "marker": 1 }),
            json!({ "type": "climate-overview", "marker": 2 }),
        ];
        assert_eq!(
            get(&features, FeatureType::ClimateOverview).and_then(|f| f.get("marker")),
            Some(&json!(1))
        );
    }

    #[test]
    fn test_remove_filters_all_matches() {
        let features = vec![
            json!({ "type": "climate-overview", "marker": 1 }),
            json!({ "type": "adjust-temperature" }),
            json!({ "type": "climate-overview", "marker": 2 }),
        ];
        let remaining = remove(&features, FeatureType::ClimateOverview);
        assert_eq!(remaining, vec![json!({ "type": "adjust-temperature" })]);

        // Input list is untouched.
        assert_eq!(features.len(), 3);
    }

    #[test]
    fn test_upsert_replaces_or_appends() {
        let features = sample();

        let replaced = upsert(
            &features,
            json!({ "type": "climate-fan-modes", "fan_modes": ["high"] }),
        );
        assert_eq!(
            get(&replaced, FeatureType::ClimateFanModes),
            Some(&json!({ "type": "climate-fan-modes", "fan_modes": ["high"] }))
        );
        assert_eq!(replaced.len(), 2);

        let appended = upsert(&features, json!({ "type": "climate-overview" }));
        assert_eq!(appended.len(), 3);
        assert!(has(&appended, FeatureType::ClimateOverview));
    }
}
