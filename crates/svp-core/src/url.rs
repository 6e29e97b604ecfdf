//! # URL Helpers
//!
//! Strict parsing is delegated to the WHATWG-conformant `url` crate. Every
//! helper is total: malformed input degrades to a sentinel or to the input
//! itself, never to an error.

use url::Url;

const HTTP_PREFIX: &str = "http://";
const HTTPS_PREFIX: &str = "https://";

/// Normalize a URL for embedding in a document.
///
/// Trims whitespace, prepends `https://` when no `http://`/`https://`
/// scheme is present (case-insensitive), then returns the canonical
/// serialization. When strict parsing fails the scheme-prefixed string is
/// returned unchanged.
///
/// ```
/// use svp_core::url::normalize_url;
/// assert_eq!(normalize_url("example.com"), "https://example.com/");
/// assert_eq!(normalize_url(""), "");
/// ```
pub fn normalize_url(url: &str) -> String {
    if url.is_empty() {
        return String::new();
    }

    let trimmed = url.trim();
    let prefixed = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{HTTPS_PREFIX}{trimmed}")
    };

    match Url::parse(&prefixed) {
        Ok(parsed) => parsed.into(),
        Err(_) => prefixed,
    }
}

/// Whether `url` parses as an absolute URL.
pub fn is_valid_url(url: &str) -> bool {
    !url.is_empty() && Url::parse(url).is_ok()
}

/// Host portion of `url`, or `""` if it does not parse or has no host.
pub fn extract_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_default()
}

fn has_http_scheme(s: &str) -> bool {
    let starts_with = |prefix: &str| {
        s.get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };
    starts_with(HTTP_PREFIX) || starts_with(HTTPS_PREFIX)
}
