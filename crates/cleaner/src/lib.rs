// ABOUTME: Query and cleanup library for parsed microformats2 trees.
// ABOUTME: Re-exports classification, value extraction, traversal, URL matching and resolvers.

//! mf2-cleaner - helpers for working with parsed microformats2 data.
//!
//! The input is the JSON tree an mf2 parser produces, held as a
//! [`serde_json::Value`]. Nothing here parses HTML or fetches pages.
//!
//! # Example
//!
//! ```
//! use mf2_cleaner::{get_author, get_plaintext, AuthorOptions};
//! use serde_json::json;
//!
//! let page = json!({
//!     "items": [
//!         {"type": ["h-entry"], "properties": {"author": ["Me"]}},
//!         {"type": ["h-card"], "properties": {"name": ["Me"], "url": ["https://me.example"]}}
//!     ],
//!     "rels": {}
//! });
//! let entry = &page["items"][0];
//! let author = get_author(entry, Some(&page), &AuthorOptions::default()).unwrap();
//! let card = author.as_card().unwrap();
//! assert_eq!(get_plaintext(card, "url", None), Some("https://me.example"));
//! ```

pub mod author;
pub mod classify;
pub mod cleaner;
pub mod error;
pub mod html_utils;
pub mod options;
pub mod representative;
pub mod time_parse;
pub mod traverse;
pub mod urls;
pub mod values;

pub use author::{get_author, Author};
pub use classify::{
    has_numeric_keys, has_prop, has_type, is_embedded_html, is_img_alt, is_microformat,
    is_microformat_collection,
};
pub use cleaner::{
    remove_false_positive_root_microformats, ClassnamePatterns, FALSE_POSITIVE_ROOT_CLASSNAMES,
};
pub use error::{Mf2Error, Result};
pub use options::AuthorOptions;
pub use representative::get_representative_h_card;
pub use traverse::{
    filter_microformats, find_microformats_by_callable, find_microformats_by_property,
    find_microformats_by_type, flatten_microformat_properties, flatten_microformats,
    root_microformats,
};
pub use urls::{any_urls_match, parse_url, same_hostname, urls_match, urls_overlap, ParsedUrl};
pub use values::{
    get_date_time_property, get_html, get_img_alt, get_plaintext, get_plaintext_array,
    get_published, get_summary, get_updated, to_html, to_img_alt, to_plaintext, ImgAlt,
};
