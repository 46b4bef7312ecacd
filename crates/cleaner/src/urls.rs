// ABOUTME: Structural URL comparison for identity matching.
// ABOUTME: Decomposes URLs into components and compares them component by component.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::Url;

use crate::error::{Mf2Error, Result};

/// The components of a URL. A component the URL does not carry is `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedUrl {
    pub scheme: Option<String>,
    pub user: Option<String>,
    pub pass: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
    pub query: Option<String>,
    pub fragment: Option<String>,
}

/// Decomposes `url` into its components. An empty path becomes `/`.
///
/// Strings that are not absolute URLs are split into path, query and
/// fragment only.
pub fn parse_url(url: &str) -> ParsedUrl {
    let mut parsed = match Url::parse(url) {
        Ok(u) => ParsedUrl {
            scheme: Some(u.scheme().to_string()),
            user: Some(u.username().to_string()).filter(|s| !s.is_empty()),
            pass: u.password().map(str::to_string),
            host: u.host_str().map(str::to_string),
            port: u.port(),
            path: Some(u.path().to_string()),
            query: u.query().map(str::to_string),
            fragment: u.fragment().map(str::to_string),
        },
        Err(_) => parse_relative(url),
    };

    if parsed.path.as_deref().map_or(true, str::is_empty) {
        parsed.path = Some("/".to_string());
    }
    parsed
}

fn parse_relative(url: &str) -> ParsedUrl {
    let (rest, fragment) = match url.split_once('#') {
        Some((rest, fragment)) => (rest, Some(fragment.to_string())),
        None => (url, None),
    };
    let (path, query) = match rest.split_once('?') {
        Some((path, query)) => (path, Some(query.to_string())),
        None => (rest, None),
    };
    ParsedUrl {
        path: Some(path.to_string()),
        query,
        fragment,
        ..ParsedUrl::default()
    }
}

/// Returns true if `a` and `b` carry the same set of components with equal
/// values.
pub fn urls_match(a: &str, b: &str) -> bool {
    parse_url(a) == parse_url(b)
}

/// Returns true if any URL of `a` matches any URL of `b`.
pub fn urls_overlap<A, B>(a: &[A], b: &[B]) -> bool
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    a.iter()
        .any(|u1| b.iter().any(|u2| urls_match(u1.as_ref(), u2.as_ref())))
}

/// Returns true if any URL of the array `a` matches any URL of the array
/// `b`. Non-string elements never match.
///
/// Fails with an invalid-argument error unless both are arrays.
pub fn any_urls_match(a: &Value, b: &Value) -> Result<bool> {
    let (Some(a), Some(b)) = (a.as_array(), b.as_array()) else {
        return Err(Mf2Error::invalid_argument(
            "any_urls_match must be called with two arrays",
        ));
    };
    let a: Vec<&str> = a.iter().filter_map(Value::as_str).collect();
    let b: Vec<&str> = b.iter().filter_map(Value::as_str).collect();
    Ok(urls_overlap(&a, &b))
}

/// Returns true if `a` and `b` have the same host. Two URLs without a host
/// count as the same.
pub fn same_hostname(a: &str, b: &str) -> bool {
    parse_url(a).host == parse_url(b).host
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_parse_url_components() {
        let parsed = parse_url("https://user:pw@example.com:8443/a/b?x=1#frag");
        assert_eq!(
            parsed,
            ParsedUrl {
                scheme: Some("https".into()),
                user: Some("user".into()),
                pass: Some("pw".into()),
                host: Some("example.com".into()),
                port: Some(8443),
                path: Some("/a/b".into()),
                query: Some("x=1".into()),
                fragment: Some("frag".into()),
            }
        );
    }

    #[test]
    fn test_parse_url_empty_path_is_root() {
        assert_eq!(parse_url("https://example.com").path.as_deref(), Some("/"));
        assert_eq!(parse_url("").path.as_deref(), Some("/"));
    }

    #[test]
    fn test_parse_relative_url() {
        let parsed = parse_url("/notes/1?page=2");
        assert_eq!(parsed.scheme, None);
        assert_eq!(parsed.host, None);
        assert_eq!(parsed.path.as_deref(), Some("/notes/1"));
        assert_eq!(parsed.query.as_deref(), Some("page=2"));
    }

    #[test]
    fn test_urls_match() {
        assert!(urls_match("https://example.com", "https://example.com/"));
        assert!(!urls_match("https://example.com/path", "https://example.com/path/"));
        assert!(!urls_match("http://example.com", "https://example.com"));
        assert!(!urls_match("https://example.com/?a=1", "https://example.com/"));
        assert!(!urls_match("https://example.com/#top", "https://example.com/"));
    }

    #[test]
    fn test_any_urls_match() {
        let a = json!(["https://a.example", "https://b.example/"]);
        let b = json!(["https://b.example"]);
        assert!(any_urls_match(&a, &b).unwrap());
        assert!(!any_urls_match(&a, &json!(["https://c.example"])).unwrap());
        assert!(!any_urls_match(&a, &json!([])).unwrap());
    }

    #[test]
    fn test_any_urls_match_rejects_non_arrays() {
        let err = any_urls_match(&json!("https://a.example"), &json!([])).unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(any_urls_match(&json!([]), &json!({"0": "x"})).is_err());
    }

    #[test]
    fn test_same_hostname() {
        assert!(same_hostname("http://example.com/a", "https://example.com/b"));
        assert!(!same_hostname("http://example.com", "http://www.example.com"));
    }
}
