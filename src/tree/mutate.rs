use serde_json::{Map, Value};

use crate::tree::path::TreePath;

/// Read the value at `path`, if the whole path resolves.
///
/// Returns `None` the instant any intermediate segment is missing or does
/// not address into its container. Numeric segments index into sequences,
/// so `inner.segments.0.color` reads the first segment's color.
pub fn get<'a>(tree: &'a Value, path: &TreePath) -> Option<&'a Value> {
    let mut current = tree;
    for segment in path.segments() {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Write `value` at `path`, copy-on-write.
///
/// Walks the intermediate segments; when one is missing or not a tree the
/// call aborts with `false` unless `create_missing` is set, in which case
/// an empty tree is materialized there (an existing scalar is replaced
/// wholesale, never merged). The final slot is written only when it is
/// vacant or `overwrite` is set.
///
/// The returned tree is always an independent clone of the input, so
/// callers may unconditionally adopt the result.
pub fn set(
    tree: &Value,
    path: &TreePath,
    value: Value,
    create_missing: bool,
    overwrite: bool,
) -> (Value, bool) {
    let mut result = tree.clone();
    let ok = set_at(&mut result, path.segments(), value, create_missing, overwrite);
    (result, ok)
}

fn set_at(
    root: &mut Value,
    segments: &[String],
    value: Value,
    create_missing: bool,
    overwrite: bool,
) -> bool {
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut current = root;
    for segment in parents {
        if !current.is_object() {
            if !create_missing {
                return false;
            }
            *current = Value::Object(Map::new());
        }
        let Value::Object(map) = current else {
            return false;
        };
        // A non-tree value along the path counts as missing.
        if !map.get(segment).is_some_and(Value::is_object) {
            if !create_missing {
                return false;
            }
            map.insert(segment.clone(), Value::Object(Map::new()));
        }
        let Some(next) = map.get_mut(segment) else {
            return false;
        };
        current = next;
    }

    if !current.is_object() {
        if !create_missing {
            return false;
        }
        *current = Value::Object(Map::new());
    }
    let Value::Object(map) = current else {
        return false;
    };
    if map.get(last).is_none() || overwrite {
        map.insert(last.clone(), value);
        true
    } else {
        false
    }
}

/// Remove the key at `path`, copy-on-write.
///
/// Returns `false` without modification when any intermediate segment is
/// missing or not a tree, or when the final key is absent.
pub fn delete(tree: &Value, path: &TreePath) -> (Value, bool) {
    let mut result = tree.clone();
    let removed = delete_at(&mut result, path.segments());
    (result, removed)
}

fn delete_at(root: &mut Value, segments: &[String]) -> bool {
    let Some((last, parents)) = segments.split_last() else {
        return false;
    };

    let mut current = root;
    for segment in parents {
        let Value::Object(map) = current else {
            return false;
        };
        let Some(next) = map.get_mut(segment) else {
            return false;
        };
        current = next;
    }

    let Value::Object(map) = current else {
        return false;
    };
    map.remove(last).is_some()
}

/// Move the value at `from` to `to`, copy-on-write.
///
/// A no-op returning an unchanged clone when the source is absent, which
/// makes repeated application safe. The destination write runs before the
/// source delete: when the destination is occupied and `overwrite` is not
/// set, the blocked write leaves the source intact, so no data is lost.
pub fn move_value(tree: &Value, from: &TreePath, to: &TreePath, overwrite: bool) -> Value {
    let Some(value) = get(tree, from).cloned() else {
        return tree.clone();
    };
    let (result, ok) = set(tree, to, value, true, overwrite);
    if !ok {
        return result;
    }
    let (result, _) = delete(&result, from);
    result
}
