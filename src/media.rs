//! Typed media types through the `mime` crate.
use alloc::string::ToString;
use mime::Mime;

use crate::error::{Error, Result};
use crate::Registry;

impl Registry {
    /// Returns the media type registered for `extension`, parsed as a [`Mime`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_registry::Registry;
    ///
    /// let mime = Registry::builtin().mime_for_extension("png").unwrap();
    /// assert_eq!(mime, mime::IMAGE_PNG);
    /// ```
    pub fn mime_for_extension(&self, extension: &str) -> Option<Mime> {
        self.extension_to_mime(extension)?.parse().ok()
    }

    /// Returns the canonical extension for a parsed media type.
    ///
    /// The full textual form is looked up, so a [`Mime`] carrying parameters
    /// misses just like the equivalent string would.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_registry::Registry;
    ///
    /// let registry = Registry::builtin();
    /// assert_eq!(registry.extension_for_mime(&mime::TEXT_PLAIN), Some("txt"));
    /// assert_eq!(registry.extension_for_mime(&mime::TEXT_PLAIN_UTF_8), None);
    /// ```
    pub fn extension_for_mime(&self, mime: &Mime) -> Option<&str> {
        self.mime_to_extension(mime.as_ref())
    }
}

/// Accepts only a bare, concrete `type/subtype`.
pub(crate) fn validate(mime: &str) -> Result<()> {
    let concrete = mime.parse::<Mime>().is_ok_and(|parsed| {
        parsed.type_() != mime::STAR
            && parsed.subtype() != mime::STAR
            && parsed.params().next().is_none()
    });

    if concrete {
        Ok(())
    } else {
        tracing::warn!(media_type = mime, "rejected media type");
        Err(Error::InvalidMimeType {
            mime: mime.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_media_types_are_concrete() {
        let registry = Registry::builtin();
        for entry in registry.extensions() {
            assert!(validate(entry.value()).is_ok(), "{}", entry.value());
        }
        for entry in registry.mime_types() {
            assert!(validate(entry.key()).is_ok(), "{}", entry.key());
        }
    }

    #[test]
    fn rejects_wildcards_and_parameters() {
        assert!(validate("text/*").is_err());
        assert!(validate("*/*").is_err());
        assert!(validate("text/html; charset=utf-8").is_err());
        assert!(validate("html").is_err());
        assert!(validate("").is_err());
    }

    #[test]
    fn builder_validates_media_types() {
        let err = Registry::builder()
            .extension("txt", "text/plain;charset=utf-8")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidMimeType {
                mime: "text/plain;charset=utf-8".to_string(),
            }
        );
    }

    #[test]
    fn typed_lookups() {
        let registry = Registry::builtin();
        assert_eq!(registry.mime_for_extension("JPG"), Some(mime::IMAGE_JPEG));
        assert_eq!(registry.mime_for_extension("nope"), None);
        assert_eq!(registry.extension_for_mime(&mime::IMAGE_JPEG), Some("jpeg"));
        assert_eq!(registry.extension_for_mime(&mime::APPLICATION_JSON), None);
    }
}
