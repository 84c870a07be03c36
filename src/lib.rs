#![deny(unsafe_code)]
#![no_std]
#![warn(missing_docs, missing_debug_implementations)]
//! Two-way lookup between file extensions and MIME types.
//!
//! This crate answers two questions for HTTP code:
//!
//! - **Serving files** - which `Content-Type` belongs to a file extension?
//! - **Saving responses** - which extension fits a response's media type?
//!
//! Both lookups run against an immutable registry that is built at compile
//! time, ignore ASCII case, and match whole strings only. A key without a
//! mapping yields `None`; no default type is imposed.
//!
//! The extension table is complete over extensions, so several extensions
//! may share one media type. The reverse table holds a single canonical
//! extension per media type and is curated on its own, which means a round
//! trip does not always give back the extension you started with.
//!
//! # Optional Features
//!
//! - `std` - Path based lookups (enabled by default)
//! - `mime` - Typed media types via the `mime` crate and validation of custom
//!   registries (enabled by default)
//! - `serde` - `Serialize` for registries and their tables
//!
//! # Examples
//!
//! ```rust
//! use mime_registry::{extension_to_mime, mime_to_extension};
//!
//! assert_eq!(extension_to_mime("html"), Some("text/html"));
//! assert_eq!(extension_to_mime("JPG"), Some("image/jpeg"));
//! assert_eq!(mime_to_extension("text/plain"), Some("txt"));
//!
//! // "htm" and "html" share a media type; "html" is the canonical extension.
//! let mime = extension_to_mime("htm").unwrap();
//! assert_eq!(mime_to_extension(mime), Some("html"));
//!
//! assert_eq!(extension_to_mime("doesnotexist"), None);
//! ```
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod data;

pub mod error;
pub use error::{Error, Result, TableKind};

pub mod header;

#[cfg(feature = "mime")]
mod media;

mod registry;
pub use registry::{Registry, RegistryBuilder};

pub mod table;
pub use table::{Entry, Table};

/// Returns the media type registered for `extension` in the built-in
/// registry.
///
/// See [`Registry::extension_to_mime`].
pub fn extension_to_mime(extension: &str) -> Option<&'static str> {
    Registry::builtin().extension_to_mime(extension)
}

/// Returns the canonical extension registered for `mime` in the built-in
/// registry.
///
/// See [`Registry::mime_to_extension`].
pub fn mime_to_extension(mime: &str) -> Option<&'static str> {
    Registry::builtin().mime_to_extension(mime)
}

/// Returns the media type for the extension of `path` in the built-in
/// registry.
///
/// See [`Registry::mime_for_path`].
#[cfg(feature = "std")]
pub fn extension_to_mime_for_path(path: impl AsRef<std::path::Path>) -> Option<&'static str> {
    Registry::builtin().mime_for_path(path)
}
