//! `Content-Type` helpers for HTTP responses.
//!
//! Servers pick a `Content-Type` for a file from its extension; clients pick
//! a file extension from a response's `Content-Type`. Both directions go
//! through a [`Registry`] and report a miss as `None`. Choosing a fallback
//! such as `application/octet-stream` is left to the caller.
//!
//! # Examples
//!
//! ```rust
//! use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
//! use mime_registry::{header, Registry};
//!
//! let registry = Registry::builtin();
//!
//! let value = header::content_type(registry, "css").unwrap();
//! assert_eq!(value, "text/css");
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"));
//! assert_eq!(header::extension_from_headers(registry, &headers), Some("html"));
//! ```
use http::header::{HeaderMap, HeaderValue, CONTENT_TYPE};

use crate::Registry;

/// Returns the `Content-Type` value for `extension`.
///
/// Returns `None` when the extension is not registered.
pub fn content_type(registry: &Registry, extension: &str) -> Option<HeaderValue> {
    HeaderValue::from_str(registry.extension_to_mime(extension)?).ok()
}

/// Guesses a file extension from the `Content-Type` of `headers`.
///
/// Parameters such as `; charset=utf-8` are dropped from the header value
/// before the exact, case-insensitive lookup. Returns `None` when the header
/// is missing, is not valid text, or names an unregistered type.
pub fn extension_from_headers<'a>(registry: &'a Registry, headers: &HeaderMap) -> Option<&'a str> {
    let value = headers.get(CONTENT_TYPE)?.to_str().ok()?;
    registry.mime_to_extension(essence(value))
}

fn essence(value: &str) -> &str {
    value.split_once(';').map_or(value, |(essence, _)| essence).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_for_known_extension() {
        let registry = Registry::builtin();
        assert_eq!(
            content_type(registry, "PDF").unwrap(),
            HeaderValue::from_static("application/pdf")
        );
        assert!(content_type(registry, "doesnotexist").is_none());
    }

    #[test]
    fn essence_strips_parameters() {
        assert_eq!(essence("text/plain"), "text/plain");
        assert_eq!(essence(" text/plain ;charset=utf-8"), "text/plain");
        assert_eq!(essence("text/plain;"), "text/plain");
    }

    #[test]
    fn extension_from_headers_misses() {
        let registry = Registry::builtin();
        let mut headers = HeaderMap::new();
        assert_eq!(extension_from_headers(registry, &headers), None);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/x-unknown"));
        assert_eq!(extension_from_headers(registry, &headers), None);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("IMAGE/JPEG"));
        assert_eq!(extension_from_headers(registry, &headers), Some("jpeg"));
    }

    #[test]
    fn every_builtin_media_type_is_a_valid_header() {
        for entry in Registry::builtin().extensions() {
            assert!(HeaderValue::from_str(entry.value()).is_ok(), "{}", entry.value());
        }
    }
}
