// ABOUTME: Representative h-card selection for a parsed page.
// ABOUTME: Applies the uid+url, rel=me and sole-h-card rules in order.

use log::debug;
use serde_json::Value;

use crate::traverse::{filter_microformats, find_microformats_by_type};
use crate::urls::{urls_match, urls_overlap};
use crate::values::{get_plaintext, get_plaintext_array};

/// Returns the h-card representing the page at `page_url`, or `None` when
/// no single card can be chosen.
///
/// Only top-level h-cards of `mfs` are candidates. The first rule yielding a
/// card wins:
/// 1. An h-card whose `uid` and one of whose `url`s match the page URL.
/// 2. An h-card with a `url` that is also a `rel=me` link on the page.
/// 3. The only h-card on the page, if one of its `url`s matches the page URL.
pub fn get_representative_h_card<'a>(mfs: &'a Value, page_url: &str) -> Option<&'a Value> {
    let h_cards = find_microformats_by_type(mfs, "h-card", false);
    let page = [page_url];

    let uid_matches = filter_microformats(h_cards.iter().copied(), |card| {
        let (Some(uid), Some(urls)) = (
            get_plaintext(card, "uid", None),
            get_plaintext_array(card, "url", None),
        ) else {
            return false;
        };
        !uid.is_empty() && urls_match(uid, page_url) && urls_overlap(&urls, &page)
    });
    if let Some(card) = uid_matches.first().copied() {
        debug!("representative h-card for {} matched by uid and url", page_url);
        return Some(card);
    }

    let rel_me: Vec<&str> = mfs
        .get("rels")
        .and_then(|rels| rels.get("me"))
        .and_then(Value::as_array)
        .map(|hrefs| hrefs.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    if !rel_me.is_empty() {
        let rel_me_matches = filter_microformats(h_cards.iter().copied(), |card| {
            get_plaintext_array(card, "url", None).is_some_and(|urls| urls_overlap(&urls, &rel_me))
        });
        if let Some(card) = rel_me_matches.first().copied() {
            debug!("representative h-card for {} matched by rel=me", page_url);
            return Some(card);
        }
    }

    if let [only] = h_cards[..] {
        let matches_page = get_plaintext_array(only, "url", None)
            .is_some_and(|urls| urls_overlap(&urls, &page));
        if matches_page {
            debug!("representative h-card for {} is the sole h-card", page_url);
            return Some(only);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_sole_h_card_with_matching_url() {
        let page = json!({
            "items": [{"type": ["h-card"], "properties": {"url": ["https://example.com"]}}],
            "rels": {}
        });
        assert!(get_representative_h_card(&page, "https://example.com/").is_some());
    }

    #[test]
    fn test_sole_h_card_without_url_is_not_representative() {
        let page = json!({
            "items": [{"type": ["h-card"], "properties": {"name": ["Nobody"]}}],
            "rels": {}
        });
        assert!(get_representative_h_card(&page, "https://example.com/").is_none());
    }

    #[test]
    fn test_uid_alone_is_not_enough() {
        let page = json!({
            "items": [
                {"type": ["h-card"], "properties": {"uid": ["https://example.com/"], "url": ["https://other.example/"]}},
                {"type": ["h-card"], "properties": {"url": ["https://third.example/"]}}
            ],
            "rels": {}
        });
        assert!(get_representative_h_card(&page, "https://example.com/").is_none());
    }
}
