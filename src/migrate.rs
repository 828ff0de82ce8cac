//! Ordered schema migration pipeline.
//!
//! Configurations written against older schema versions are rewritten into
//! the current shape by a fixed, ordered sequence of renames followed by
//! one structural step (legacy severity thresholds become a segment list).
//! Every step is a no-op when its source key is absent, which makes the
//! whole pipeline idempotent: re-running it on an already-migrated tree
//! changes nothing.

use log::debug;
use serde_json::Value;

use crate::{
    segment::{SegmentEntry, Segments},
    tree::{self, TreePath},
};

/// A declarative rename of one tree location to another.
struct Rename {
    from: &'static [&'static str],
    to: &'static [&'static str],
    overwrite: bool,
}

/// The rename table, in execution order.
///
/// Order is significant: `valueText` is first normalized to `value_text`
/// so the later `value_text` step carries it into `value_texts.primary`,
/// and `inner.value_text` must be lifted out before `inner` is considered
/// settled. First write wins when two sources feed one destination.
const RENAMES: &[Rename] = &[
    Rename {
        from: &["gradientResolution"],
        to: &["gradient_resolution"],
        overwrite: false,
    },
    Rename {
        from: &["name"],
        to: &["titles", "primary"],
        overwrite: false,
    },
    Rename {
        from: &["segmentsTemplate"],
        to: &["segments"],
        overwrite: false,
    },
    Rename {
        from: &["severityTemplate"],
        to: &["severity"],
        overwrite: false,
    },
    Rename {
        from: &["valueText"],
        to: &["value_text"],
        overwrite: false,
    },
    Rename {
        from: &["primary"],
        to: &["titles", "primary"],
        overwrite: false,
    },
    Rename {
        from: &["primary_color"],
        to: &["titles", "primary_color"],
        overwrite: false,
    },
    Rename {
        from: &["secondary"],
        to: &["titles", "secondary"],
        overwrite: false,
    },
    Rename {
        from: &["secondary_color"],
        to: &["titles", "secondary_color"],
        overwrite: false,
    },
    Rename {
        from: &["value_text"],
        to: &["value_texts", "primary"],
        overwrite: false,
    },
    Rename {
        from: &["value_text_color"],
        to: &["value_texts", "primary_color"],
        overwrite: false,
    },
    Rename {
        from: &["inner", "value_text"],
        to: &["value_texts", "secondary"],
        overwrite: false,
    },
    Rename {
        from: &["inner", "value_text_color"],
        to: &["value_texts", "secondary_color"],
        overwrite: false,
    },
];

/// Legacy severity tiers and the fixed color token each one maps to.
const SEVERITY_TIERS: &[(&str, &str)] = &[
    ("green", "var(--label-badge-green)"),
    ("yellow", "var(--label-badge-yellow)"),
    ("red", "var(--label-badge-red)"),
];

/// Rewrite a configuration produced by an older schema into the current
/// shape. Copy-on-write and idempotent.
pub fn migrate_config(tree: &Value) -> Value {
    let mut current = tree.clone();
    for step in RENAMES {
        let from = TreePath::from_segments(step.from.iter().copied());
        let to = TreePath::from_segments(step.to.iter().copied());
        current = tree::move_value(&current, &from, &to, step.overwrite);
    }
    migrate_severity(&current)
}

/// Synthesize a segment list from legacy `severity` thresholds.
///
/// Runs only when `severity` is a present object (not a template string)
/// and `segments` is absent; otherwise the tree passes through unchanged.
fn migrate_severity(tree: &Value) -> Value {
    let severity_path = TreePath::from_segments(["severity"]);
    let segments_path = TreePath::from_segments(["segments"]);

    let Some(severity) = tree::get(tree, &severity_path) else {
        return tree.clone();
    };
    if tree::get(tree, &segments_path).is_some() {
        return tree.clone();
    }
    if matches!(
        Segments::classify(Some(severity)),
        Segments::Template(_)
    ) {
        // Severity templates resolve externally; leave them alone.
        return tree.clone();
    }
    let Some(thresholds) = severity.as_object() else {
        return tree.clone();
    };

    let entries: Vec<SegmentEntry> = SEVERITY_TIERS
        .iter()
        .filter_map(|(tier, color)| {
            thresholds.get(*tier).map(|bound| SegmentEntry {
                bound: bound.clone(),
                color: (*color).to_string(),
            })
        })
        .collect();
    debug!("migrating severity thresholds into {} segment(s)", entries.len());

    let segments = Segments::From(entries).sorted();
    let Some(segments_value) = segments.to_value() else {
        return tree.clone();
    };
    let (result, ok) = tree::set(tree, &segments_path, segments_value, true, false);
    if !ok {
        return tree.clone();
    }
    let (result, _) = tree::delete(&result, &severity_path);
    result
}

/// Independent legacy rename for the icon block.
///
/// `icon.battery` and `icon.template` each become `icon.value` paired with
/// the matching literal `type` discriminator. No-op when the legacy keys
/// are absent, so re-application is safe.
pub fn migrate_icon(tree: &Value) -> Value {
    let mut current = tree.clone();
    let value_path = TreePath::from_segments(["icon", "value"]);
    let type_path = TreePath::from_segments(["icon", "type"]);

    for legacy in ["battery", "template"] {
        let from = TreePath::from_segments(["icon", legacy]);
        if tree::get(&current, &from).is_none() {
            continue;
        }
        let moved = tree::move_value(&current, &from, &value_path, false);
        if tree::get(&moved, &from).is_some() {
            // Destination occupied; leave the legacy key in place.
            current = moved;
            continue;
        }
        debug!("migrating icon.{legacy} to icon.value");
        let (with_type, _) = tree::set(
            &moved,
            &type_path,
            Value::String(legacy.to_string()),
            true,
            true,
        );
        current = with_type;
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rename_table_end_to_end() {
        let legacy = json!({
            "entity": "sensor.power",
            "primary": "Power",
            "primary_color": "red",
            "secondary": "Now",
            "secondary_color": "blue",
            "value_text": "{{ states('sensor.power') }}",
            "value_text_color": "white",
            "inner": {
                "min": 0,
                "max": 100,
                "value_text": "inner text",
                "value_text_color": "gray",
            },
        });

        let migrated = migrate_config(&legacy);
        assert_eq!(
            migrated,
            json!({
                "entity": "sensor.power",
                "titles": {
                    "primary": "Power",
                    "primary_color": "red",
                    "secondary": "Now",
                    "secondary_color": "blue",
                },
                "value_texts": {
                    "primary": "{{ states('sensor.power') }}",
                    "primary_color": "white",
                    "secondary": "inner text",
                    "secondary_color": "gray",
                },
                "inner": { "min": 0, "max": 100 },
            })
        );
    }

    #[test]
    fn test_camel_case_renames_chain() {
        let legacy = json!({
            "gradientResolution": "medium",
            "valueText": "42 W",
            "segmentsTemplate": "{{ segments }}",
        });
        let migrated = migrate_config(&legacy);
        assert_eq!(migrated["gradient_resolution"], json!("medium"));
        assert_eq!(migrated["value_texts"]["primary"], json!("42 W"));
        assert_eq!(migrated["segments"], json!("{{ segments }}"));
        assert!(migrated.get("valueText").is_none());
        assert!(migrated.get("value_text").is_none());
    }

    #[test]
    fn test_name_wins_over_primary_when_both_present() {
        let legacy = json!({ "name": "Old", "primary": "New" });
        let migrated = migrate_config(&legacy);
        // First write wins; the blocked source stays put.
        assert_eq!(migrated["titles"]["primary"], json!("Old"));
        assert_eq!(migrated["primary"], json!("New"));
    }

    #[test]
    fn test_severity_becomes_sorted_segments() {
        let legacy = json!({ "severity": { "red": 50, "green": 0, "yellow": 25 } });
        let migrated = migrate_config(&legacy);
        assert!(migrated.get("severity").is_none());
        assert_eq!(
            migrated["segments"],
            json!([
                { "from": 0, "color": "var(--label-badge-green)" },
                { "from": 25, "color": "var(--label-badge-yellow)" },
                { "from": 50, "color": "var(--label-badge-red)" },
            ])
        );
    }

    #[test]
    fn test_severity_partial_tiers() {
        let legacy = json!({ "severity": { "red": 80 } });
        let migrated = migrate_config(&legacy);
        assert_eq!(
            migrated["segments"],
            json!([{ "from": 80, "color": "var(--label-badge-red)" }])
        );
    }

    #[test]
    fn test_severity_template_passes_through() {
        let legacy = json!({ "severityTemplate": "{{ severity }}" });
        let migrated = migrate_config(&legacy);
        // Renamed to severity, but not expanded into segments.
        assert_eq!(migrated["severity"], json!("{{ severity }}"));
        assert!(migrated.get("segments").is_none());
    }

    #[test]
    fn test_severity_skipped_when_segments_present() {
        let legacy = json!({
            "severity": { "green": 0 },
            "segments": [{ "from": 10, "color": "blue" }],
        });
        let migrated = migrate_config(&legacy);
        assert_eq!(migrated, legacy);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let legacy = json!({
            "name": "Kitchen",
            "value_text": "x",
            "severity": { "green": 0, "red": 50 },
            "inner": { "value_text": "y" },
        });
        let once = migrate_config(&legacy);
        let twice = migrate_config(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_icon_battery_rename() {
        let legacy = json!({ "icon": { "battery": "sensor.phone_battery" } });
        let migrated = migrate_icon(&legacy);
        assert_eq!(
            migrated,
            json!({ "icon": { "type": "battery", "value": "sensor.phone_battery" } })
        );
        assert_eq!(migrate_icon(&migrated), migrated);
    }

    #[test]
    fn test_icon_template_rename() {
        let legacy = json!({ "icon": { "template": "{{ icon }}" } });
        let migrated = migrate_icon(&legacy);
        assert_eq!(
            migrated,
            json!({ "icon": { "type": "template", "value": "{{ icon }}" } })
        );
    }

    #[test]
    fn test_icon_migration_noop_without_legacy_keys() {
        let current = json!({ "icon": { "type": "battery", "value": "sensor.b" } });
        assert_eq!(migrate_icon(&current), current);
        let no_icon = json!({ "entity": "sensor.x" });
        assert_eq!(migrate_icon(&no_icon), no_icon);
    }
}
