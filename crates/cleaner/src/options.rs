// ABOUTME: Configuration for author discovery.
// ABOUTME: AuthorOptions carries the page URL and matching toggles with a fluent API.

use serde::Deserialize;

/// Knobs for [`get_author`](crate::author::get_author).
///
/// Deserializes with missing fields taking their defaults, so a partial
/// config like `{"match_name": false}` is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AuthorOptions {
    /// URL the entry was fetched from. When unset, the entry's own `url`
    /// property is used.
    pub url: Option<String>,
    /// Whether a plain-text author may be matched against h-card names.
    pub match_name: bool,
    /// Whether an h-card on the same host as the entry URL counts as the
    /// author.
    pub match_hostname: bool,
}

impl Default for AuthorOptions {
    fn default() -> Self {
        Self {
            url: None,
            match_name: true,
            match_hostname: true,
        }
    }
}

impl AuthorOptions {
    /// Create options with every matching strategy enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the URL the entry was fetched from.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Enable or disable matching author names against h-cards.
    pub fn match_name(mut self, enabled: bool) -> Self {
        self.match_name = enabled;
        self
    }

    /// Enable or disable matching h-cards by hostname.
    pub fn match_hostname(mut self, enabled: bool) -> Self {
        self.match_hostname = enabled;
        self
    }
}
