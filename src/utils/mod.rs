//! Utility functions and helpers.

pub mod http;
pub mod price;

use url::Url;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Percent-encode a search term for use in a URL template.
pub fn encode_query(term: &str) -> String {
    url::form_urlencoded::byte_serialize(term.trim().as_bytes()).collect()
}
