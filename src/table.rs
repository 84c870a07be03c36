//! Sorted lookup tables with ASCII case-insensitive keys.
//!
//! A [`Table`] is an immutable sequence of [`Entry`] values kept in ascending
//! key order, where keys compare byte by byte after ASCII lowercasing. Lookups
//! are binary searches over that order, so a table never holds two keys that
//! differ only in case.
//!
//! # Examples
//!
//! ```rust
//! use mime_registry::Registry;
//!
//! let extensions = Registry::builtin().extensions();
//! assert_eq!(extensions.get("PNG"), Some("image/png"));
//! assert!(!extensions.contains_key(".png"));
//! ```
use alloc::borrow::Cow;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::cmp::Ordering;
use unicase::Ascii;

use crate::error::{Error, Result, TableKind};

/// A single `key => value` pair of a [`Table`].
///
/// Built-in entries borrow string literals; entries of custom registries own
/// their strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry {
    key: Cow<'static, str>,
    value: Cow<'static, str>,
}

impl Entry {
    /// Creates an entry from owned or borrowed strings.
    pub fn new(key: impl Into<Cow<'static, str>>, value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Creates an entry borrowing two string literals.
    pub const fn from_static(key: &'static str, value: &'static str) -> Self {
        Self {
            key: Cow::Borrowed(key),
            value: Cow::Borrowed(value),
        }
    }

    /// Returns the lookup key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the mapped value.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// An immutable, sorted table of unique keys.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Table {
    entries: Cow<'static, [Entry]>,
}

impl Table {
    /// Wraps built-in entries. Callers guarantee order and uniqueness, which
    /// the `table!` macro checks at compile time.
    pub(crate) const fn from_static(entries: &'static [Entry]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    /// Sorts `entries` by key and rejects empty or duplicated keys.
    pub(crate) fn from_entries<I>(kind: TableKind, entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = Entry>,
    {
        let mut entries: Vec<Entry> = entries.into_iter().collect();
        if entries.iter().any(|entry| entry.key.is_empty()) {
            return Err(Error::EmptyKey { table: kind });
        }

        // Stable, so a duplicate is reported under the spelling given last.
        entries.sort_by(|a, b| Ascii::new(a.key()).cmp(&Ascii::new(b.key())));
        if let Some(pair) = entries
            .windows(2)
            .find(|pair| Ascii::new(pair[0].key()) == Ascii::new(pair[1].key()))
        {
            return Err(Error::DuplicateKey {
                table: kind,
                key: pair[1].key().to_string(),
            });
        }

        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    /// Looks up the value mapped to `key`, ignoring ASCII case.
    ///
    /// Only whole keys match: no trimming, prefix or wildcard matching is
    /// done.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mime_registry::Registry;
    ///
    /// let mime_types = Registry::builtin().mime_types();
    /// assert_eq!(mime_types.get("Text/HTML"), Some("html"));
    /// assert_eq!(mime_types.get("text/html; charset=utf-8"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&str> {
        self.position(key).map(|index| self.entries[index].value())
    }

    /// Returns `true` if `key` is present, ignoring ASCII case.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the entries in ascending key order.
    pub fn iter(&self) -> core::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    fn position(&self, key: &str) -> Option<usize> {
        let key = Ascii::new(key);
        self.entries
            .binary_search_by(|entry| Ascii::new(entry.key()).cmp(&key))
            .ok()
    }
}

impl<'a> IntoIterator for &'a Table {
    type Item = &'a Entry;
    type IntoIter = core::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compares two keys byte by byte after ASCII lowercasing.
pub(crate) const fn compare_keys(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut i = 0;
    while i < a.len() && i < b.len() {
        let (x, y) = (a[i].to_ascii_lowercase(), b[i].to_ascii_lowercase());
        if x < y {
            return Ordering::Less;
        }
        if x > y {
            return Ordering::Greater;
        }
        i += 1;
    }

    if a.len() < b.len() {
        Ordering::Less
    } else if a.len() > b.len() {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Returns `true` if every key is non-empty and strictly greater than the one
/// before it.
pub(crate) const fn is_strictly_ascending(keys: &[&str]) -> bool {
    let mut i = 0;
    while i < keys.len() {
        if keys[i].is_empty() {
            return false;
        }
        if i > 0 && !matches!(compare_keys(keys[i - 1], keys[i]), Ordering::Less) {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;
    use alloc::vec;

    fn table(pairs: &[(&'static str, &'static str)]) -> Result<Table> {
        Table::from_entries(
            TableKind::Extensions,
            pairs.iter().map(|&(k, v)| Entry::from_static(k, v)),
        )
    }

    #[test]
    fn compare_keys_folds_ascii_case() {
        assert_eq!(compare_keys("PDF", "pdf"), Ordering::Equal);
        assert_eq!(compare_keys("htm", "html"), Ordering::Less);
        assert_eq!(compare_keys("Zip", "avi"), Ordering::Greater);
        // '_' sits between upper and lower case letters in ASCII.
        assert_eq!(compare_keys("a_", "aB"), Ordering::Less);
    }

    #[test]
    fn compare_keys_agrees_with_unicase() {
        let keys = ["", "3gp", "A", "a_b", "aB", "html", "HTM", "x-world", "x.y"];
        for a in keys {
            for b in keys {
                assert_eq!(
                    compare_keys(a, b),
                    Ascii::new(a).cmp(&Ascii::new(b)),
                    "{a:?} vs {b:?}"
                );
            }
        }
    }

    #[test]
    fn strictly_ascending() {
        assert!(is_strictly_ascending(&[]));
        assert!(is_strictly_ascending(&["a", "B", "c"]));
        assert!(!is_strictly_ascending(&["b", "a"]));
        assert!(!is_strictly_ascending(&["a", "A"]));
        assert!(!is_strictly_ascending(&["", "a"]));
    }

    #[test]
    fn from_entries_sorts() {
        let table = table(&[("png", "image/png"), ("GIF", "image/gif"), ("bmp", "image/bmp")])
            .unwrap();
        let keys: Vec<&str> = table.iter().map(Entry::key).collect();
        assert_eq!(keys, vec!["bmp", "GIF", "png"]);
        assert_eq!(table.get("gif"), Some("image/gif"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn from_entries_rejects_duplicates() {
        let err = table(&[("htm", "text/html"), ("png", "image/png"), ("HTM", "text/plain")])
            .unwrap_err();
        assert_eq!(
            err,
            Error::DuplicateKey {
                table: TableKind::Extensions,
                key: String::from("HTM"),
            }
        );
    }

    #[test]
    fn from_entries_rejects_empty_key() {
        let err = table(&[("", "text/plain")]).unwrap_err();
        assert_eq!(
            err,
            Error::EmptyKey {
                table: TableKind::Extensions
            }
        );
    }

    #[test]
    fn lookup_is_whole_key() {
        let table = table(&[("tar", "application/x-tar")]).unwrap();
        assert_eq!(table.get("TAR"), Some("application/x-tar"));
        assert_eq!(table.get("ta"), None);
        assert_eq!(table.get("tar "), None);
        assert_eq!(table.get(".tar"), None);
        assert_eq!(table.get(""), None);
    }

    #[test]
    fn empty_table() {
        let table = table(&[]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.get("anything"), None);
    }
}
