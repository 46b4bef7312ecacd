// ABOUTME: Heuristic author discovery for mf2 entries.
// ABOUTME: Resolves an entry's author to an h-card from page context where possible.

//! Author discovery.
//!
//! Resolution order (first hit wins):
//! 1. An `author` (or `reviewer`) property that is already an h-card.
//! 2. A plain-text author matched against page h-cards by `url`, then by
//!    `name`; an unmatched plain-text author is returned as text.
//! 3. The `author` of an h-feed on the page.
//! 4. The h-card linked by the first `rel=author` URL.
//! 5. An h-card sharing the entry URL's host.
//! 6. The `rel=author` URL itself.
//!
//! This is deliberately smaller than the full IndieWeb authorship
//! algorithm: nothing is fetched.

use log::debug;
use serde_json::Value;

use crate::classify::{has_type, is_microformat, prop_values};
use crate::options::AuthorOptions;
use crate::traverse::{filter_microformats, flatten_microformats, has_prop_value};
use crate::urls::same_hostname;
use crate::values::{get_plaintext, get_plaintext_array, to_plaintext};

/// A resolved author: either a node from the tree or a bare string such as
/// a name or URL.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Author<'a> {
    Card(&'a Value),
    Text(&'a str),
}

impl<'a> Author<'a> {
    fn from_value(v: &'a Value) -> Option<Self> {
        if is_microformat(v) {
            return Some(Author::Card(v));
        }
        to_plaintext(v).map(Author::Text)
    }

    /// Returns the author node, if the author resolved to one.
    pub fn as_card(&self) -> Option<&'a Value> {
        match *self {
            Author::Card(mf) => Some(mf),
            Author::Text(_) => None,
        }
    }

    /// Returns the author string, if the author resolved to one.
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Author::Card(_) => None,
            Author::Text(s) => Some(s),
        }
    }
}

/// Returns the author of `mf`, using `context` (the whole parsed page) to
/// upgrade plain-text authors to h-cards.
///
/// Without context only the entry's own `author`/`reviewer` is consulted.
/// Never fails: when nothing ties the entry to an author, returns `None`.
pub fn get_author<'a>(
    mf: &'a Value,
    context: Option<&'a Value>,
    options: &AuthorOptions,
) -> Option<Author<'a>> {
    let url = options
        .url
        .as_deref()
        .or_else(|| get_plaintext(mf, "url", None));

    let first_author = prop_values(mf, "author").and_then(|values| values.first());
    let first_reviewer = prop_values(mf, "reviewer").and_then(|values| values.first());

    let mut entry_author = match (first_author, first_reviewer) {
        (Some(author), _) if is_microformat(author) => Some(Author::Card(author)),
        (_, Some(reviewer)) if is_microformat(reviewer) => Some(Author::Card(reviewer)),
        _ => get_plaintext(mf, "author", None).map(Author::Text),
    };

    let Some(context) = context else {
        return entry_author;
    };

    let flattened = flatten_microformats(context);
    let h_cards = filter_microformats(flattened.iter().copied(), |node| has_type(node, "h-card"));

    if let Some(Author::Text(author_url)) = entry_author {
        let matched = h_cards
            .iter()
            .copied()
            .find(|card| has_prop_value(card, "url", author_url));
        if let Some(card) = matched {
            debug!("author {:?} matched h-card by url", author_url);
            entry_author = Some(Author::Card(card));
        }
    }

    if let (Some(Author::Text(name)), true) = (entry_author, options.match_name) {
        let matched = h_cards
            .iter()
            .copied()
            .find(|card| has_prop_value(card, "name", name));
        if let Some(card) = matched {
            debug!("author {:?} matched h-card by name", name);
            entry_author = Some(Author::Card(card));
        }
    }

    if entry_author.is_some() {
        return entry_author;
    }

    let feed_author = flattened
        .iter()
        .copied()
        .filter(|node| has_type(node, "h-feed"))
        .find_map(|feed| prop_values(feed, "author").and_then(|values| values.first()))
        .and_then(Author::from_value);
    if feed_author.is_some() {
        debug!("author taken from h-feed");
        return feed_author;
    }

    let rel_author_href = context
        .get("rels")
        .and_then(|rels| rels.get("author"))
        .and_then(Value::as_array)
        .and_then(|hrefs| hrefs.first())
        .and_then(Value::as_str)
        .filter(|href| !href.is_empty());

    if let Some(href) = rel_author_href {
        let matched = h_cards
            .iter()
            .copied()
            .find(|card| has_prop_value(card, "url", href));
        if let Some(card) = matched {
            debug!("author matched h-card by rel=author {}", href);
            return Some(Author::Card(card));
        }
    }

    if let (Some(url), true) = (url, options.match_hostname) {
        let same_host = h_cards.iter().copied().find(|card| {
            get_plaintext_array(card, "url", None)
                .is_some_and(|urls| urls.iter().any(|u| same_hostname(url, u)))
        });
        if let Some(card) = same_host {
            debug!("author matched h-card by hostname of {}", url);
            return Some(Author::Card(card));
        }
    }

    rel_author_href.map(Author::Text)
}
