//! The two-way extension and media type registry.
//!
//! A [`Registry`] owns two independent tables: one mapping extensions to
//! media types, and one mapping media types to a single canonical extension.
//! The built-in registry is a compile-time constant shared by every caller;
//! [`RegistryBuilder`] produces separate registries and never touches it.
use alloc::borrow::Cow;
use alloc::vec::Vec;

use crate::data;
use crate::error::{Result, TableKind};
use crate::table::{Entry, Table};

static BUILTIN: Registry = Registry {
    extensions: Table::from_static(data::EXTENSIONS),
    mime_types: Table::from_static(data::MIME_TYPES),
};

/// Bidirectional lookup between file extensions and media types.
///
/// Both lookups ignore ASCII case and match whole strings only. The reverse
/// table is curated separately from the forward one, so going from an
/// extension to its media type and back does not always return the
/// extension you started with.
///
/// # Examples
///
/// ```rust
/// use mime_registry::Registry;
///
/// let registry = Registry::builtin();
/// let mime = registry.extension_to_mime("htm").unwrap();
/// assert_eq!(mime, "text/html");
/// assert_eq!(registry.mime_to_extension(mime), Some("html"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Registry {
    extensions: Table,
    mime_types: Table,
}

impl Registry {
    /// Returns the built-in registry.
    ///
    /// The registry is built at compile time and lives for the whole process,
    /// so any number of threads may query it without synchronization.
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Starts building a custom registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Returns the media type registered for `extension`.
    ///
    /// `extension` is a bare token such as `"pdf"`. A leading dot is not
    /// stripped and makes the lookup miss.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_registry::Registry;
    ///
    /// let registry = Registry::builtin();
    /// assert_eq!(registry.extension_to_mime("Pdf"), Some("application/pdf"));
    /// assert_eq!(registry.extension_to_mime(".pdf"), None);
    /// ```
    pub fn extension_to_mime(&self, extension: &str) -> Option<&str> {
        self.extensions.get(extension)
    }

    /// Returns the canonical extension registered for `mime`.
    ///
    /// `mime` must be a bare `type/subtype`; parameters such as
    /// `; charset=utf-8` are not stripped and make the lookup miss.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_registry::Registry;
    ///
    /// let registry = Registry::builtin();
    /// assert_eq!(registry.mime_to_extension("image/jpeg"), Some("jpeg"));
    /// assert_eq!(registry.mime_to_extension("text/plain; charset=utf-8"), None);
    /// ```
    pub fn mime_to_extension(&self, mime: &str) -> Option<&str> {
        self.mime_types.get(mime)
    }

    /// Returns the media type for the extension of `path`.
    ///
    /// Only the part after the last dot of the file name is used, so
    /// `"archive.tar.gz"` is looked up as `"gz"`. Paths without an extension
    /// or with a non-UTF-8 one miss. The file itself is never read.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_registry::Registry;
    ///
    /// let registry = Registry::builtin();
    /// assert_eq!(registry.mime_for_path("static/INDEX.HTML"), Some("text/html"));
    /// assert_eq!(registry.mime_for_path("Makefile"), None);
    /// ```
    #[cfg(feature = "std")]
    pub fn mime_for_path(&self, path: impl AsRef<std::path::Path>) -> Option<&str> {
        let extension = path.as_ref().extension()?.to_str()?;
        self.extension_to_mime(extension)
    }

    /// Returns the extension to media type table.
    pub fn extensions(&self) -> &Table {
        &self.extensions
    }

    /// Returns the media type to extension table.
    pub fn mime_types(&self) -> &Table {
        &self.mime_types
    }
}

impl Default for Registry {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

/// Builder for a custom [`Registry`].
///
/// Entries are collected in any order; [`build`](Self::build) sorts them and
/// rejects keys that collide ignoring ASCII case. The forward and reverse
/// tables are filled independently, exactly like the built-in data: adding an
/// extension does not add a reverse mapping.
///
/// # Examples
///
/// ```rust
/// use mime_registry::Registry;
///
/// let registry = Registry::builder()
///     .with_builtin()
///     .extension("webmanifest", "application/manifest+json")
///     .mime_type("application/manifest+json", "webmanifest")
///     .build()?;
///
/// assert_eq!(
///     registry.extension_to_mime("webmanifest"),
///     Some("application/manifest+json")
/// );
/// assert_eq!(registry.extension_to_mime("html"), Some("text/html"));
/// # Ok::<(), mime_registry::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    extensions: Vec<Entry>,
    mime_types: Vec<Entry>,
}

impl RegistryBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds every built-in mapping.
    ///
    /// Built-in entries borrow static strings, so this does not copy the
    /// string data.
    pub fn with_builtin(mut self) -> Self {
        self.extensions.extend(BUILTIN.extensions.iter().cloned());
        self.mime_types.extend(BUILTIN.mime_types.iter().cloned());
        self
    }

    /// Maps `extension` to `mime`.
    pub fn extension(
        mut self,
        extension: impl Into<Cow<'static, str>>,
        mime: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.extensions.push(Entry::new(extension, mime));
        self
    }

    /// Maps `mime` to its canonical `extension`.
    pub fn mime_type(
        mut self,
        mime: impl Into<Cow<'static, str>>,
        extension: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.mime_types.push(Entry::new(mime, extension));
        self
    }

    /// Builds the registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyKey`](crate::Error::EmptyKey) or
    /// [`Error::DuplicateKey`](crate::Error::DuplicateKey) when a table key is
    /// empty or repeated. With the `mime` feature, returns
    /// [`Error::InvalidMimeType`](crate::Error::InvalidMimeType) when a media
    /// type does not parse, carries parameters, or uses a `*` wildcard.
    pub fn build(self) -> Result<Registry> {
        #[cfg(feature = "mime")]
        {
            let forward = self.extensions.iter().map(Entry::value);
            let reverse = self.mime_types.iter().map(Entry::key);
            for mime in forward.chain(reverse) {
                crate::media::validate(mime)?;
            }
        }

        let extensions = Table::from_entries(TableKind::Extensions, self.extensions)
            .inspect_err(|error| tracing::warn!(%error, "rejected extension table"))?;
        let mime_types = Table::from_entries(TableKind::MimeTypes, self.mime_types)
            .inspect_err(|error| tracing::warn!(%error, "rejected media type table"))?;

        tracing::debug!(
            extensions = extensions.len(),
            mime_types = mime_types.len(),
            "built media type registry"
        );

        Ok(Registry {
            extensions,
            mime_types,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use alloc::string::{String, ToString};

    #[test]
    fn builtin_is_shared() {
        assert!(core::ptr::eq(Registry::builtin(), Registry::builtin()));
        assert_eq!(Registry::default(), *Registry::builtin());
    }

    #[test]
    fn builtin_table_sizes() {
        let registry = Registry::builtin();
        assert_eq!(registry.extensions().len(), 584);
        assert_eq!(registry.mime_types().len(), 365);
    }

    #[test]
    fn builder_accepts_owned_strings() {
        let extension = String::from("Rs");
        let registry = Registry::builder()
            .extension(extension, "text/x-rust".to_string())
            .build()
            .unwrap();

        assert_eq!(registry.extension_to_mime("rs"), Some("text/x-rust"));
        // Forward entries never imply reverse ones.
        assert_eq!(registry.mime_to_extension("text/x-rust"), None);
    }

    #[test]
    fn builder_rejects_builtin_collision() {
        let err = Registry::builder()
            .with_builtin()
            .extension("JS", "text/javascript")
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            Error::DuplicateKey {
                table: TableKind::Extensions,
                key: "JS".to_string(),
            }
        );
    }

    #[test]
    fn builder_rejects_reverse_collision() {
        let err = Registry::builder()
            .mime_type("text/plain", "txt")
            .mime_type("TEXT/PLAIN", "text")
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            Error::DuplicateKey {
                table: TableKind::MimeTypes,
                ..
            }
        ));
    }

    #[test]
    fn with_builtin_copies_every_entry() {
        let registry = Registry::builder().with_builtin().build().unwrap();
        assert_eq!(registry, *Registry::builtin());
    }

    #[cfg(feature = "std")]
    #[test]
    fn mime_for_path() {
        let registry = Registry::builtin();
        assert_eq!(registry.mime_for_path("a/b/photo.JPG"), Some("image/jpeg"));
        assert_eq!(registry.mime_for_path(".hidden"), None);
        assert_eq!(registry.mime_for_path("dir.d/README"), None);
    }
}
