// ABOUTME: Flattening and filtering over mf2 forests.
// ABOUTME: Walks nested property microformats and children in document order.

//! Tree traversal.
//!
//! Key behaviors:
//! - A forest may be given as a collection (`{"items": [...]}`), a single
//!   microformat, or a bare array of nodes.
//! - Flattening emits each root, then the microformats nested in its
//!   properties depth-first, then each direct child followed by the
//!   microformats nested in that child's properties.
//! - Non-microformat property values are never descended into.

use serde_json::Value;

use crate::classify::{has_type, is_microformat, is_microformat_collection, prop_values};

/// Returns the top-level nodes of a forest without descending into them.
pub fn root_microformats(mfs: &Value) -> Vec<&Value> {
    if is_microformat_collection(mfs) {
        return mfs["items"].as_array().map(|items| items.iter().collect()).unwrap_or_default();
    }
    if is_microformat(mfs) {
        return vec![mfs];
    }
    match mfs.as_array() {
        Some(nodes) => nodes.iter().collect(),
        None => Vec::new(),
    }
}

/// Returns every microformat nested in the properties of `mf`, depth-first.
pub fn flatten_microformat_properties(mf: &Value) -> Vec<&Value> {
    let mut items = Vec::new();
    collect_property_microformats(mf, &mut items);
    items
}

fn collect_property_microformats<'a>(mf: &'a Value, out: &mut Vec<&'a Value>) {
    if !is_microformat(mf) {
        return;
    }
    let Some(properties) = mf.get("properties").and_then(Value::as_object) else {
        return;
    };

    for values in properties.values().filter_map(Value::as_array) {
        for value in values {
            if is_microformat(value) {
                out.push(value);
                collect_property_microformats(value, out);
            }
        }
    }
}

/// Flattens a forest into a single list of nodes in traversal order.
///
/// Children are treated as sibling roots: each is emitted with its own
/// property microformats, but its children are not visited.
pub fn flatten_microformats(mfs: &Value) -> Vec<&Value> {
    let mut items = Vec::new();

    for mf in root_microformats(mfs) {
        items.push(mf);
        collect_property_microformats(mf, &mut items);

        let Some(children) = mf.get("children").and_then(Value::as_array) else {
            continue;
        };
        for child in children {
            items.push(child);
            collect_property_microformats(child, &mut items);
        }
    }

    items
}

/// Keeps the nodes satisfying `predicate`, preserving order.
pub fn filter_microformats<'a, I, F>(nodes: I, predicate: F) -> Vec<&'a Value>
where
    I: IntoIterator<Item = &'a Value>,
    F: Fn(&Value) -> bool,
{
    nodes.into_iter().filter(|mf| predicate(*mf)).collect()
}

/// Returns every node of `mfs` satisfying `predicate`.
///
/// When `flatten` is set and `mfs` is a microformat or collection, nested
/// nodes are searched too; otherwise only the top-level nodes are.
pub fn find_microformats_by_callable<'a, F>(
    mfs: &'a Value,
    predicate: F,
    flatten: bool,
) -> Vec<&'a Value>
where
    F: Fn(&Value) -> bool,
{
    let nodes = if flatten && (is_microformat(mfs) || is_microformat_collection(mfs)) {
        flatten_microformats(mfs)
    } else {
        root_microformats(mfs)
    };
    filter_microformats(nodes, predicate)
}

/// Returns every node of `mfs` whose `type` includes `name`.
pub fn find_microformats_by_type<'a>(mfs: &'a Value, name: &str, flatten: bool) -> Vec<&'a Value> {
    find_microformats_by_callable(mfs, |mf| has_type(mf, name), flatten)
}

/// Returns every node of `mfs` whose `prop_name` values include the string
/// `prop_value`.
pub fn find_microformats_by_property<'a>(
    mfs: &'a Value,
    prop_name: &str,
    prop_value: &str,
    flatten: bool,
) -> Vec<&'a Value> {
    find_microformats_by_callable(mfs, |mf| has_prop_value(mf, prop_name, prop_value), flatten)
}

/// Returns true if one of the raw `prop_name` values of `mf` is the string
/// `prop_value`.
pub(crate) fn has_prop_value(mf: &Value, prop_name: &str, prop_value: &str) -> bool {
    prop_values(mf, prop_name)
        .is_some_and(|values| values.iter().any(|v| v.as_str() == Some(prop_value)))
}
