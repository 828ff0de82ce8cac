//! Typed current-schema configuration structures.
//!
//! These structs write down the current gauge-card schema. Trees flowing
//! through migration and normalization stay loosely typed; this typed view
//! backs the structural validator and documents what "current shape"
//! means. Unknown keys are rejected, which is how stale legacy fields are
//! caught after migration.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Root gauge card configuration, current schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GaugeCardConfig {
    /// Card type tag (e.g. `custom:gauge-card`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
    /// Entity whose state drives the gauge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// Lower bound of the scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound of the scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Unit shown next to the value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Draw a needle instead of filling the gauge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub needle: Option<bool>,
    /// Render segments as a smooth gradient.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<bool>,
    /// Gradient sampling resolution, a preset name or a sample count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient_resolution: Option<Value>,
    /// Scale bands: a segment list or a template string, shape-classified
    /// at read time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Value>,
    /// Title texts above the gauge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titles: Option<Titles>,
    /// Value texts inside the gauge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_texts: Option<ValueTexts>,
    /// Optional inner gauge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner: Option<InnerGauge>,
    /// Optional setpoint marker.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setpoint: Option<Setpoint>,
    /// Optional icon block.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Optional indicator markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicators: Option<Vec<Indicator>>,
    /// Optional type-discriminated feature blocks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<Value>>,
}

/// Title texts and their colors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Titles {
    /// Primary title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Primary title color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Secondary title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Secondary title color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

/// Value texts and their colors. Empty strings here are meaningful
/// overrides (render nothing), not "unset".
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ValueTexts {
    /// Primary value text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Primary value text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Secondary value text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Secondary value text color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

/// Inner gauge section.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InnerGauge {
    /// Inner gauge rendering mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    /// Lower bound of the inner scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound of the inner scale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Inner scale bands, list or template string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Value>,
}

/// Setpoint marker on the scale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Setpoint {
    /// Setpoint variant discriminator.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub setpoint_type: Option<String>,
    /// Variant-specific value; dropped by the normalizer when the type
    /// changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Marker color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Icon block inside the gauge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Icon {
    /// Icon variant discriminator (e.g. `battery`, `template`).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<String>,
    /// Variant-specific value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// Indicator marker on the scale.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Indicator {
    /// Indicator variant discriminator.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub indicator_type: Option<String>,
    /// Variant-specific value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Marker color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}
