// ABOUTME: Removal of false-positive root microformats from a parsed tree.
// ABOUTME: Hoists the children of nodes whose types are all known utility classnames.

//! False-positive root removal.
//!
//! Some CSS frameworks ship utility classnames (`h-full`, `h-screen`, ...)
//! that the mf2 parser reads as root classnames. This module rewrites a
//! tree as if those classnames had never been there: a node whose types
//! are all false positives is replaced by its children, wherever it
//! appears (top level, property value or child list).

use log::trace;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};

use crate::classify::{is_microformat, is_microformat_collection};
use crate::error::{Mf2Error, Result};
use crate::traverse::root_microformats;

/// Known false-positive root classnames, as unanchored regexes.
pub const FALSE_POSITIVE_ROOT_CLASSNAMES: &[&str] = &[
    // Tailwind height utilities
    "h-px",
    "h-auto",
    "h-full",
    "h-screen",
    "h-min",
    "h-max",
    "h-fit",
    // Prefixes seen in the wild
    r"h-screen-[a-zA-Z0-9_-]+",
    r"h-full-[a-zA-Z0-9_-]+",
];

static DEFAULT_PATTERNS: Lazy<ClassnamePatterns> = Lazy::new(|| ClassnamePatterns {
    regexes: FALSE_POSITIVE_ROOT_CLASSNAMES
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect(),
});

/// A set of classname regexes identifying false-positive root types.
#[derive(Debug, Clone)]
pub struct ClassnamePatterns {
    regexes: Vec<Regex>,
}

impl ClassnamePatterns {
    /// Compiles a custom pattern list. Patterns match anywhere in a type
    /// name unless anchored.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let regexes = patterns
            .into_iter()
            .map(|p| {
                let p = p.as_ref();
                Regex::new(p).map_err(|e| Mf2Error::invalid_pattern(p, e))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { regexes })
    }

    /// Wraps already compiled regexes.
    pub fn from_regexes(regexes: Vec<Regex>) -> Self {
        Self { regexes }
    }

    /// The built-in list of known false positives.
    pub fn builtin() -> &'static ClassnamePatterns {
        &DEFAULT_PATTERNS
    }

    /// Returns true if `classname` matches any pattern.
    pub fn matches(&self, classname: &str) -> bool {
        self.regexes.iter().any(|re| re.is_match(classname))
    }

    /// Returns true if every entry of the `types` array is a matching
    /// string.
    fn matches_all(&self, types: &Value) -> bool {
        types.as_array().is_some_and(|types| {
            types
                .iter()
                .all(|t| t.as_str().is_some_and(|t| self.matches(t)))
        })
    }
}

impl Default for ClassnamePatterns {
    fn default() -> Self {
        DEFAULT_PATTERNS.clone()
    }
}

/// Rewrites `mfs` without its false-positive root microformats.
///
/// Accepts a collection or a single microformat and always returns a
/// collection (`{"items": [...]}`), since one false positive may expand into
/// any number of children. Anything else yields an empty collection.
/// `patterns` defaults to [`ClassnamePatterns::builtin`].
pub fn remove_false_positive_root_microformats(
    mfs: &Value,
    patterns: Option<&ClassnamePatterns>,
) -> Value {
    let patterns = patterns.unwrap_or_else(|| ClassnamePatterns::builtin());

    let items = if is_microformat_collection(mfs) || is_microformat(mfs) {
        correct_all(root_microformats(mfs), patterns)
    } else {
        Vec::new()
    };

    json!({ "items": items })
}

fn correct_all<'a, I>(values: I, patterns: &ClassnamePatterns) -> Vec<Value>
where
    I: IntoIterator<Item = &'a Value>,
{
    values
        .into_iter()
        .flat_map(|v| correct(v, patterns))
        .collect()
}

/// Returns the replacement for a single value: itself (rebuilt bottom-up)
/// or, for a false positive, its corrected children.
fn correct(value: &Value, patterns: &ClassnamePatterns) -> Vec<Value> {
    let Some(map) = value.as_object().filter(|_| is_microformat(value)) else {
        return vec![value.clone()];
    };

    let mut node = Map::with_capacity(map.len());
    for (key, field) in map {
        let rewritten = match (key.as_str(), field) {
            ("properties", Value::Object(properties)) => Value::Object(
                properties
                    .iter()
                    .map(|(name, values)| (name.clone(), correct_property(values, patterns)))
                    .collect(),
            ),
            ("children", Value::Array(children)) => Value::Array(correct_all(children, patterns)),
            _ => field.clone(),
        };
        node.insert(key.clone(), rewritten);
    }

    if !patterns.matches_all(&map["type"]) {
        return vec![Value::Object(node)];
    }

    trace!("hoisting children of false-positive root {}", map["type"]);
    match node.remove("children") {
        Some(Value::Array(children)) => children,
        _ => Vec::new(),
    }
}

fn correct_property(values: &Value, patterns: &ClassnamePatterns) -> Value {
    match values {
        Value::Array(values) => Value::Array(correct_all(values, patterns)),
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_patterns() {
        let patterns = ClassnamePatterns::builtin();
        assert!(patterns.matches("h-full"));
        assert!(patterns.matches("h-screen-md"));
        assert!(!patterns.matches("h-card"));
    }

    #[test]
    fn test_invalid_custom_pattern() {
        let err = ClassnamePatterns::new(["h-("]).unwrap_err();
        assert!(matches!(err, Mf2Error::InvalidPattern { .. }));
    }

    #[test]
    fn test_precompiled_patterns_borrowed_per_call() {
        let patterns = ClassnamePatterns::from_regexes(vec![Regex::new("^h-layout$").unwrap()]);
        let tree = json!({"items": [{
            "type": ["h-layout"],
            "properties": {},
            "children": [{"type": ["h-entry"], "properties": {}}]
        }]});
        assert_eq!(
            remove_false_positive_root_microformats(&tree, Some(&patterns)),
            json!({"items": [{"type": ["h-entry"], "properties": {}}]})
        );
        assert!(!patterns.matches("h-full"));
    }

    #[test]
    fn test_single_microformat_is_wrapped() {
        let card = json!({"type": ["h-card"], "properties": {"name": ["Me"]}});
        assert_eq!(
            remove_false_positive_root_microformats(&card, None),
            json!({"items": [card.clone()]})
        );
    }

    #[test]
    fn test_non_microformat_input_yields_empty_collection() {
        assert_eq!(
            remove_false_positive_root_microformats(&json!("nope"), None),
            json!({"items": []})
        );
    }

    #[test]
    fn test_mixed_types_are_kept() {
        let node = json!({"type": ["h-full", "h-card"], "properties": {}});
        assert_eq!(
            remove_false_positive_root_microformats(&node, None),
            json!({"items": [node.clone()]})
        );
    }
}
