//! Error types for registry construction.
//!
//! Lookups never fail: a key without a mapping is reported as `None`. The
//! [`Error`] type only covers building a custom [`Registry`](crate::Registry),
//! where the input pairs may be malformed or collide with each other.
//!
//! # Examples
//!
//! ```rust
//! use mime_registry::{Error, Registry};
//!
//! let result = Registry::builder()
//!     .extension("md", "text/markdown")
//!     .extension("MD", "text/x-markdown")
//!     .build();
//!
//! assert!(matches!(result, Err(Error::DuplicateKey { .. })));
//! ```
use alloc::string::String;
use core::fmt::{self, Display};

/// Identifies which of the two registry tables an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    /// The extension to media type table.
    Extensions,
    /// The media type to extension table.
    MimeTypes,
}

impl Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extensions => f.write_str("extension"),
            Self::MimeTypes => f.write_str("media type"),
        }
    }
}

/// Error type for registry construction.
///
/// # Examples
///
/// ```rust
/// use mime_registry::{Error, Registry, TableKind};
///
/// match Registry::builder().extension("", "text/plain").build() {
///     Err(Error::EmptyKey { table }) => assert_eq!(table, TableKind::Extensions),
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A key was the empty string.
    ///
    /// An empty key can never be produced by a well-formed caller, so it is
    /// rejected instead of being stored as an unreachable entry.
    EmptyKey {
        /// The table the key was meant for.
        table: TableKind,
    },
    /// Two entries of the same table share a key, ignoring ASCII case.
    ///
    /// Lookups are binary searches, so a duplicated key would resolve to
    /// whichever entry the search happens to land on.
    DuplicateKey {
        /// The table holding the duplicate.
        table: TableKind,
        /// The key as it was given for the rejected entry.
        key: String,
    },
    /// A media type string could not be parsed.
    #[cfg(feature = "mime")]
    InvalidMimeType {
        /// The rejected media type.
        mime: String,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyKey { table } => write!(f, "empty {table} key"),
            Self::DuplicateKey { table, key } => write!(f, "duplicate {table} key `{key}`"),
            #[cfg(feature = "mime")]
            Self::InvalidMimeType { mime } => write!(f, "invalid media type `{mime}`"),
        }
    }
}

impl core::error::Error for Error {}

/// A specialized Result type for registry construction.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display_messages() {
        let empty = Error::EmptyKey {
            table: TableKind::MimeTypes,
        };
        assert_eq!(empty.to_string(), "empty media type key");

        let duplicate = Error::DuplicateKey {
            table: TableKind::Extensions,
            key: "HTM".to_string(),
        };
        assert_eq!(duplicate.to_string(), "duplicate extension key `HTM`");
    }

    #[cfg(feature = "mime")]
    #[test]
    fn display_invalid_mime() {
        let invalid = Error::InvalidMimeType {
            mime: "not a type".to_string(),
        };
        assert_eq!(invalid.to_string(), "invalid media type `not a type`");
    }
}
