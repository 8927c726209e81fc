//! Query-string parameter extraction.
//!
//! Tolerant by design: malformed input yields an empty string, never an
//! error, because a bad marketing URL must not block page analytics.

use url::form_urlencoded;

/// Extracts a named parameter from a URL's query string.
///
/// Scans the query string in order and returns the decoded value of the
/// first pair whose key case-insensitively equals any of `names`. Decoding
/// is percent-unescape plus `+` to space; the result is whitespace-trimmed.
///
/// Returns an empty string when the URL has no query string or nothing
/// matches.
///
/// # Examples
///
/// ```
/// use nci_urs::utils::query_string::extract_query_param;
///
/// let url = "https://www.google.com/search?q=lung+cancer";
/// assert_eq!(extract_query_param(&["q", "query"], url), "lung cancer");
/// ```
pub fn extract_query_param(names: &[&str], url: &str) -> String {
    match url.find('?') {
        Some(idx) => extract_from_query(names, &url[idx + 1..]),
        None => String::new(),
    }
}

/// As [`extract_query_param`], over a bare query string (no leading `?`).
pub fn extract_from_query(names: &[&str], query: &str) -> String {
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if names.iter().any(|name| key.eq_ignore_ascii_case(name)) {
            return value.trim().to_string();
        }
    }
    String::new()
}
