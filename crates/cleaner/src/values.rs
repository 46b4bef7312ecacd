// ABOUTME: Property value extraction for mf2 nodes.
// ABOUTME: Canonicalizes values to plaintext, HTML and img-alt, and reads summaries and dates.

//! Property value extraction.
//!
//! A property value is a plain string, an `{value, html}` embedded markup
//! value, an `{value, alt}` image value, or a nested microformat. These
//! helpers collapse that variety into the representation the caller asks
//! for. Every getter takes a fallback which is returned when the property
//! is missing or empty.

use serde::Serialize;
use serde_json::Value;

use crate::classify::{is_embedded_html, is_img_alt, is_microformat, prop_values};
use crate::html_utils::{escape_html, strip_tags};
use crate::time_parse::is_valid_datetime;

/// Characters of content kept when a summary is derived from it.
const SUMMARY_LENGTH: usize = 19;

/// An image URL paired with its alternative text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImgAlt<'a> {
    pub value: &'a str,
    pub alt: &'a str,
}

/// Returns the plaintext form of a property value.
///
/// Microformats, embedded HTML and img-alt values yield their `value`;
/// strings yield themselves. Anything without a string form is absent.
pub fn to_plaintext(v: &Value) -> Option<&str> {
    if is_microformat(v) || is_embedded_html(v) || is_img_alt(v) {
        return v.get("value").and_then(Value::as_str);
    }
    v.as_str()
}

/// Returns the plaintext of the first `name` value, or `fallback`.
pub fn get_plaintext<'a>(
    mf: &'a Value,
    name: &str,
    fallback: Option<&'a str>,
) -> Option<&'a str> {
    match prop_values(mf, name) {
        Some(values) => values.first().and_then(to_plaintext),
        None => fallback,
    }
}

/// Returns the plaintext of every `name` value, or `fallback`.
///
/// Values with no string form are skipped.
pub fn get_plaintext_array<'a>(
    mf: &'a Value,
    name: &str,
    fallback: Option<Vec<&'a str>>,
) -> Option<Vec<&'a str>> {
    match prop_values(mf, name) {
        Some(values) => Some(values.iter().filter_map(to_plaintext).collect()),
        None => fallback,
    }
}

/// Returns the HTML form of a property value.
///
/// Embedded HTML yields its `html` untouched; microformats and strings are
/// escaped.
pub fn to_html(v: &Value) -> Option<String> {
    if is_embedded_html(v) {
        return v.get("html").and_then(Value::as_str).map(str::to_string);
    }
    if is_microformat(v) {
        return v.get("value").and_then(Value::as_str).map(escape_html);
    }
    v.as_str().map(escape_html)
}

/// Returns the HTML of the first `name` value, or `fallback`.
pub fn get_html(mf: &Value, name: &str, fallback: Option<&str>) -> Option<String> {
    match prop_values(mf, name) {
        Some(values) => values.first().and_then(to_html),
        None => fallback.map(str::to_string),
    }
}

/// Returns a property value as an img-alt pair.
///
/// Strings and microformats get an empty `alt`.
pub fn to_img_alt(v: &Value) -> Option<ImgAlt<'_>> {
    if is_img_alt(v) {
        return Some(ImgAlt {
            value: v.get("value")?.as_str()?,
            alt: v.get("alt")?.as_str()?,
        });
    }
    let value = if is_microformat(v) {
        v.get("value")?.as_str()?
    } else {
        v.as_str()?
    };
    Some(ImgAlt { value, alt: "" })
}

/// Returns the first `name` value as an img-alt pair, or `fallback`.
pub fn get_img_alt<'a>(
    mf: &'a Value,
    name: &str,
    fallback: Option<ImgAlt<'a>>,
) -> Option<ImgAlt<'a>> {
    match prop_values(mf, name) {
        Some(values) => values.first().and_then(to_img_alt),
        None => fallback,
    }
}

/// Returns the `summary` of `mf`, or derives one from its `content`.
///
/// A derived summary is the first 19 characters of the tag-stripped content
/// followed by an ellipsis.
pub fn get_summary(mf: &Value) -> Option<String> {
    if prop_values(mf, "summary").is_some() {
        return get_plaintext(mf, "summary", None).map(str::to_string);
    }

    if prop_values(mf, "content").is_some() {
        let content = get_plaintext(mf, "content", None).unwrap_or("");
        let mut summary: String = strip_tags(content).chars().take(SUMMARY_LENGTH).collect();
        summary.push('…');
        return Some(summary);
    }

    None
}

/// Returns the publication datetime of `mf`, falling back to `updated`.
pub fn get_published<'a>(
    mf: &'a Value,
    ensure_valid: bool,
    fallback: Option<&'a str>,
) -> Option<&'a str> {
    get_date_time_property("published", mf, ensure_valid, fallback)
}

/// Returns the last-updated datetime of `mf`, falling back to `published`.
pub fn get_updated<'a>(
    mf: &'a Value,
    ensure_valid: bool,
    fallback: Option<&'a str>,
) -> Option<&'a str> {
    get_date_time_property("updated", mf, ensure_valid, fallback)
}

/// Reads the datetime property `name`, or its complement (`published` and
/// `updated` stand in for one another).
///
/// With `ensure_valid`, a value that does not parse as a datetime is
/// replaced by `fallback`.
pub fn get_date_time_property<'a>(
    name: &str,
    mf: &'a Value,
    ensure_valid: bool,
    fallback: Option<&'a str>,
) -> Option<&'a str> {
    let complement = if name == "published" { "updated" } else { "published" };

    let found = if prop_values(mf, name).is_some() {
        get_plaintext(mf, name, None)
    } else if prop_values(mf, complement).is_some() {
        get_plaintext(mf, complement, None)
    } else {
        return fallback;
    };

    if !ensure_valid {
        return found;
    }

    match found {
        Some(value) if is_valid_datetime(value) => Some(value),
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(properties: Value) -> Value {
        json!({"type": ["h-entry"], "properties": properties})
    }

    #[test]
    fn test_to_plaintext_variants() {
        assert_eq!(to_plaintext(&json!("plain")), Some("plain"));
        assert_eq!(
            to_plaintext(&json!({"value": "Hi", "html": "<b>Hi</b>"})),
            Some("Hi")
        );
        assert_eq!(
            to_plaintext(&json!({"type": ["h-card"], "properties": {}, "value": "Me"})),
            Some("Me")
        );
        assert_eq!(to_plaintext(&json!({"value": "a.jpg", "alt": "A"})), Some("a.jpg"));
        assert_eq!(to_plaintext(&json!(42)), None);
    }

    #[test]
    fn test_get_plaintext_uses_first_value() {
        let mf = entry(json!({"name": ["First", "Second"]}));
        assert_eq!(get_plaintext(&mf, "name", None), Some("First"));
        assert_eq!(get_plaintext(&mf, "missing", Some("dflt")), Some("dflt"));
    }

    #[test]
    fn test_get_plaintext_array() {
        let mf = entry(json!({"url": ["http://a.example", {"value": "http://b.example", "html": ""}]}));
        assert_eq!(
            get_plaintext_array(&mf, "url", None),
            Some(vec!["http://a.example", "http://b.example"])
        );
        assert_eq!(get_plaintext_array(&mf, "uid", None), None);
    }

    #[test]
    fn test_to_html() {
        assert_eq!(
            to_html(&json!({"value": "Hi", "html": "<b>Hi</b>"})).as_deref(),
            Some("<b>Hi</b>")
        );
        assert_eq!(to_html(&json!("a < b")).as_deref(), Some("a &lt; b"));
        assert_eq!(
            to_html(&json!({"type": ["h-card"], "properties": {}, "value": "Tom & Jerry"}))
                .as_deref(),
            Some("Tom &amp; Jerry")
        );
    }

    #[test]
    fn test_get_html_fallback() {
        let mf = entry(json!({}));
        assert_eq!(get_html(&mf, "content", Some("none")).as_deref(), Some("none"));
    }

    #[test]
    fn test_img_alt() {
        let mf = entry(json!({"photo": [{"value": "a.jpg", "alt": "A cat"}], "featured": ["b.jpg"]}));
        assert_eq!(
            get_img_alt(&mf, "photo", None),
            Some(ImgAlt { value: "a.jpg", alt: "A cat" })
        );
        assert_eq!(
            get_img_alt(&mf, "featured", None),
            Some(ImgAlt { value: "b.jpg", alt: "" })
        );
    }

    #[test]
    fn test_summary_prefers_summary_property() {
        let mf = entry(json!({"summary": ["Hello Summary"], "content": ["Ignored"]}));
        assert_eq!(get_summary(&mf).as_deref(), Some("Hello Summary"));
    }

    #[test]
    fn test_summary_counts_characters_not_bytes() {
        let mf = entry(json!({"content": ["ééééééééééééééééééééé"]}));
        assert_eq!(get_summary(&mf).as_deref(), Some("ééééééééééééééééééé…"));
    }

    #[test]
    fn test_summary_absent() {
        assert_eq!(get_summary(&entry(json!({}))), None);
    }

    #[test]
    fn test_date_time_property_prefers_own_key() {
        let mf = entry(json!({"published": ["2013-12-06"], "updated": ["2013-12-07"]}));
        assert_eq!(get_updated(&mf, false, None), Some("2013-12-07"));
        assert_eq!(get_published(&mf, false, None), Some("2013-12-06"));
    }

    #[test]
    fn test_date_time_property_validation() {
        let mf = entry(json!({"updated": ["werty"]}));
        assert_eq!(get_published(&mf, false, None), Some("werty"));
        assert_eq!(get_published(&mf, true, None), None);
        assert_eq!(get_published(&mf, true, Some("fallback")), Some("fallback"));
    }
}
