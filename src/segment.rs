//! Segment shape classification and conversion.
//!
//! A gauge scale is divided into colored bands ("segments"). The tree-level
//! `segments` value is polymorphic: a list keyed by lower bound (`from`), a
//! list keyed by position (`pos`), a single template string computed
//! externally, or absent. The variant is never stored explicitly; it is
//! inferred from the data once, here, into the tagged [`Segments`] union so
//! downstream code can match exhaustively instead of re-probing shapes.

use std::cmp::Ordering;

use serde_json::{Map, Value};

/// One colored band of a gauge scale.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentEntry {
    /// Lower bound (`from`) or position (`pos`) of the band. A number in
    /// fully resolved configurations; a string when templated per entry.
    pub bound: Value,
    /// Color of the band.
    pub color: String,
}

/// Classified shape of a `segments` value, decided once at read time.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Segments {
    /// Uniform list keyed by lower bound (`from` + `color`).
    From(Vec<SegmentEntry>),
    /// Uniform list keyed by position (`pos` + `color`).
    Pos(Vec<SegmentEntry>),
    /// A single template string, resolved externally.
    Template(String),
    /// Absent, empty, or not matching any known shape.
    #[default]
    None,
}

impl Segments {
    /// Classify a raw `segments` value.
    ///
    /// Decision order: a sequence where every element has `from` and
    /// `color` classifies as [`Segments::From`]; failing that, every
    /// element having `pos` and `color` classifies as [`Segments::Pos`];
    /// a string classifies as [`Segments::Template`]; anything else is
    /// [`Segments::None`]. One non-matching element makes the entire list
    /// unrecognized, not just that element.
    pub fn classify(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Array(items)) => {
                if let Some(entries) = entries_keyed_by(items, "from") {
                    Segments::From(entries)
                } else if let Some(entries) = entries_keyed_by(items, "pos") {
                    Segments::Pos(entries)
                } else {
                    Segments::None
                }
            }
            Some(Value::String(template)) => Segments::Template(template.clone()),
            _ => Segments::None,
        }
    }

    /// Flip a bound-keyed list to position-keyed or back.
    ///
    /// Entries keep their bound, color, order and count exactly, so a
    /// double conversion reproduces the original list. Templates and
    /// unrecognized values pass through unchanged.
    pub fn convert(self) -> Self {
        match self {
            Segments::From(entries) => Segments::Pos(entries),
            Segments::Pos(entries) => Segments::From(entries),
            other => other,
        }
    }

    /// Whether the entries are non-decreasing by their numeric key.
    ///
    /// Advisory only (drives a "sort" affordance in the editor); pairs
    /// that cannot be compared numerically are skipped. Templates and
    /// unrecognized values count as sorted.
    pub fn is_sorted(&self) -> bool {
        let entries = match self {
            Segments::From(entries) | Segments::Pos(entries) => entries,
            _ => return true,
        };
        entries.windows(2).all(|pair| {
            match (pair[0].bound.as_f64(), pair[1].bound.as_f64()) {
                (Some(a), Some(b)) => a <= b,
                _ => true,
            }
        })
    }

    /// A copy with entries stably sorted ascending by numeric key.
    ///
    /// Non-numeric bounds have no meaningful order and sort to the front,
    /// keeping their relative order.
    pub fn sorted(&self) -> Self {
        match self {
            Segments::From(entries) => Segments::From(sort_entries(entries)),
            Segments::Pos(entries) => Segments::Pos(sort_entries(entries)),
            other => other.clone(),
        }
    }

    /// Serialize back into the tree-level representation.
    ///
    /// Returns `None` for [`Segments::None`], meaning the key should stay
    /// absent.
    pub fn to_value(&self) -> Option<Value> {
        match self {
            Segments::From(entries) => Some(entries_to_value(entries, "from")),
            Segments::Pos(entries) => Some(entries_to_value(entries, "pos")),
            Segments::Template(template) => Some(Value::String(template.clone())),
            Segments::None => None,
        }
    }
}

fn entries_keyed_by(items: &[Value], key: &str) -> Option<Vec<SegmentEntry>> {
    if items.is_empty() {
        return None;
    }
    items
        .iter()
        .map(|item| {
            let map = item.as_object()?;
            let bound = map.get(key)?;
            if !bound.is_number() && !bound.is_string() {
                return None;
            }
            let color = map.get("color")?.as_str()?;
            Some(SegmentEntry {
                bound: bound.clone(),
                color: color.to_string(),
            })
        })
        .collect()
}

fn entries_to_value(entries: &[SegmentEntry], key: &str) -> Value {
    Value::Array(
        entries
            .iter()
            .map(|entry| {
                let mut map = Map::new();
                map.insert(key.to_string(), entry.bound.clone());
                map.insert("color".to_string(), Value::String(entry.color.clone()));
                Value::Object(map)
            })
            .collect(),
    )
}

fn sort_entries(entries: &[SegmentEntry]) -> Vec<SegmentEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| {
        let ka = a.bound.as_f64().unwrap_or(f64::NEG_INFINITY);
        let kb = b.bound.as_f64().unwrap_or(f64::NEG_INFINITY);
        ka.partial_cmp(&kb).unwrap_or(Ordering::Equal)
    });
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_from_list() {
        let value = json!([
            { "from": 0, "color": "green" },
            { "from": 50, "color": "red" },
        ]);
        let Segments::From(entries) = Segments::classify(Some(&value)) else {
            panic!("expected a from-keyed list");
        };
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].color, "green");
        assert_eq!(entries[1].bound, json!(50));
    }

    #[test]
    fn test_classify_pos_list() {
        let value = json!([{ "pos": 1, "color": "blue" }]);
        assert!(matches!(
            Segments::classify(Some(&value)),
            Segments::Pos(_)
        ));
    }

    #[test]
    fn test_classify_template() {
        let value = json!("{{ states('sensor.temp') }}");
        assert_eq!(
            Segments::classify(Some(&value)),
            Segments::Template("{{ states('sensor.temp') }}".to_string())
        );
    }

    #[test]
    fn test_classify_none_cases() {
        assert_eq!(Segments::classify(None), Segments::None);
        assert_eq!(Segments::classify(Some(&json!(null))), Segments::None);
        assert_eq!(Segments::classify(Some(&json!([]))), Segments::None);
        assert_eq!(Segments::classify(Some(&json!(42))), Segments::None);
        assert_eq!(
            Segments::classify(Some(&json!({ "from": 0, "color": "red" }))),
            Segments::None
        );
    }

    #[test]
    fn test_one_bad_element_rejects_whole_list() {
        // Second element lacks a color, so the entire list is unrecognized.
        let value = json!([
            { "from": 0, "color": "green" },
            { "from": 50 },
        ]);
        assert_eq!(Segments::classify(Some(&value)), Segments::None);

        // A non-scalar bound is likewise rejected.
        let value = json!([{ "from": { "nested": 1 }, "color": "green" }]);
        assert_eq!(Segments::classify(Some(&value)), Segments::None);
    }

    #[test]
    fn test_string_bounds_are_accepted() {
        let value = json!([{ "from": "{{ min }}", "color": "green" }]);
        assert!(matches!(
            Segments::classify(Some(&value)),
            Segments::From(_)
        ));
    }

    #[test]
    fn test_convert_round_trip() {
        let value = json!([
            { "from": 0, "color": "green" },
            { "from": 25.5, "color": "yellow" },
            { "from": 50, "color": "red" },
        ]);
        let original = Segments::classify(Some(&value));
        let round_tripped = original.clone().convert().convert();
        assert_eq!(round_tripped, original);

        // One conversion flips the key but keeps bounds, colors and order.
        let converted = original.convert();
        assert_eq!(
            converted.to_value().unwrap(),
            json!([
                { "pos": 0, "color": "green" },
                { "pos": 25.5, "color": "yellow" },
                { "pos": 50, "color": "red" },
            ])
        );
    }

    #[test]
    fn test_is_sorted() {
        let unsorted = Segments::classify(Some(&json!([
            { "from": 10, "color": "red" },
            { "from": 5, "color": "green" },
        ])));
        assert!(!unsorted.is_sorted());

        let sorted = Segments::classify(Some(&json!([
            { "pos": 1, "color": "red" },
            { "pos": 2, "color": "green" },
        ])));
        assert!(sorted.is_sorted());

        assert!(Segments::Template("{{ x }}".to_string()).is_sorted());
        assert!(Segments::None.is_sorted());
    }

    #[test]
    fn test_sorted_is_stable_and_ascending() {
        let segments = Segments::classify(Some(&json!([
            { "from": 50, "color": "red" },
            { "from": 0, "color": "green" },
            { "from": 25, "color": "yellow" },
        ])));
        assert_eq!(
            segments.sorted().to_value().unwrap(),
            json!([
                { "from": 0, "color": "green" },
                { "from": 25, "color": "yellow" },
                { "from": 50, "color": "red" },
            ])
        );
        assert!(segments.sorted().is_sorted());
    }
}
