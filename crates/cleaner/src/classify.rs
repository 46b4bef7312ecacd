// ABOUTME: Shape predicates for mf2 trees.
// ABOUTME: Distinguishes microformat nodes, collections, embedded HTML and img-alt values.

use serde_json::{Map, Value};

/// Returns true if `v` is keyed by position rather than by name.
///
/// A non-empty JSON array counts, as does an object with any key that reads
/// as a finite number (`"0"`, `"12"`, `"1.5"`).
pub fn has_numeric_keys(v: &Value) -> bool {
    match v {
        Value::Array(arr) => !arr.is_empty(),
        Value::Object(map) => map.keys().any(|k| is_numeric_key(k)),
        _ => false,
    }
}

fn is_numeric_key(key: &str) -> bool {
    key.trim_start()
        .parse::<f64>()
        .map(|n| n.is_finite())
        .unwrap_or(false)
}

/// Borrows `v` as a named-key record, rejecting anything positional.
fn as_record(v: &Value) -> Option<&Map<String, Value>> {
    if has_numeric_keys(v) {
        return None;
    }
    v.as_object()
}

fn is_set(map: &Map<String, Value>, key: &str) -> bool {
    map.get(key).is_some_and(|v| !v.is_null())
}

/// Returns true if `v` is a microformat node: a named-key record with a
/// non-empty `type` array and a `properties` key.
pub fn is_microformat(v: &Value) -> bool {
    let Some(map) = as_record(v) else {
        return false;
    };
    let has_type = map
        .get("type")
        .and_then(Value::as_array)
        .is_some_and(|types| !types.is_empty());
    has_type && is_set(map, "properties")
}

/// Returns true if `v` has an `items` key holding an array.
pub fn is_microformat_collection(v: &Value) -> bool {
    v.get("items").is_some_and(Value::is_array)
}

/// Returns true if `v` is an `{value, html}` embedded markup value.
pub fn is_embedded_html(v: &Value) -> bool {
    as_record(v).is_some_and(|map| is_set(map, "value") && is_set(map, "html"))
}

/// Returns true if `v` is an `{value, alt}` image value and carries nothing
/// else.
pub fn is_img_alt(v: &Value) -> bool {
    as_record(v)
        .is_some_and(|map| map.len() == 2 && is_set(map, "value") && is_set(map, "alt"))
}

/// Returns the value sequence for `name` when it is a non-empty array.
pub(crate) fn prop_values<'a>(mf: &'a Value, name: &str) -> Option<&'a Vec<Value>> {
    mf.get("properties")?
        .get(name)?
        .as_array()
        .filter(|values| !values.is_empty())
}

/// Returns true if `mf.properties[name]` exists and is a non-empty array.
pub fn has_prop(mf: &Value, name: &str) -> bool {
    prop_values(mf, name).is_some()
}

/// Returns true if `mf` lists `name` among its types.
pub fn has_type(mf: &Value, name: &str) -> bool {
    mf.get("type")
        .and_then(Value::as_array)
        .is_some_and(|types| types.iter().any(|t| t.as_str() == Some(name)))
}
