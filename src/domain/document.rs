// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsed agent configuration file.
//!
//! A `ConfigDocument` is the ordered, key-unique result of parsing an agent
//! configuration file. Each line becomes a `ConfigEntry`.

use crate::domain::ConfigKey;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Marker that disables a key when it prefixes the key name.
pub const DISABLED_MARKER: char = '#';

/// A single parsed `key=value` line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigEntry {
    /// Key with any disabled marker removed.
    pub key: ConfigKey,
    /// Value text; always empty for a disabled entry.
    pub value: String,
    /// `false` when the key was written as `#key=...`.
    pub enabled: bool,
}

impl ConfigEntry {
    /// Creates an enabled entry.
    pub fn enabled(key: impl Into<ConfigKey>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            enabled: true,
        }
    }

    /// Creates a disabled entry. Its value is always empty.
    pub fn disabled(key: impl Into<ConfigKey>) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
            enabled: false,
        }
    }

    /// Builds an entry from a raw key and value as split from a line.
    ///
    /// A leading `#` on the key disables the entry and erases its value.
    pub fn from_raw(raw_key: &str, raw_value: &str) -> Self {
        match raw_key.strip_prefix(DISABLED_MARKER) {
            Some(key) => Self::disabled(key),
            None => Self::enabled(raw_key, raw_value),
        }
    }

    /// Value as seen by the agent: empty when disabled.
    pub fn effective_value(&self) -> &str {
        if self.enabled {
            &self.value
        } else {
            ""
        }
    }
}

/// Ordered collection of parsed entries with unique keys.
///
/// Inserting a key that is already present replaces its entry (last write wins)
/// while keeping the position where the key first appeared.
///
/// # Examples
///
/// ```
/// use uacfg::domain::{ConfigDocument, ConfigEntry};
///
/// let mut doc = ConfigDocument::new();
/// doc.insert(ConfigEntry::enabled("a", "1"));
/// doc.insert(ConfigEntry::enabled("a", "2"));
///
/// assert_eq!(doc.len(), 1);
/// assert_eq!(doc.get("a").unwrap().value, "2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigDocument {
    entries: IndexMap<ConfigKey, ConfigEntry>,
}

impl ConfigDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry, replacing any entry with the same key.
    ///
    /// Returns the replaced entry, if any.
    pub fn insert(&mut self, entry: ConfigEntry) -> Option<ConfigEntry> {
        self.entries.insert(entry.key.clone(), entry)
    }

    /// Looks up an entry by its raw (un-normalized) key.
    pub fn get(&self, key: &str) -> Option<&ConfigEntry> {
        self.entries.get(&ConfigKey::from(key))
    }

    /// Returns `true` if the document has an entry for the key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over the entries in file order.
    pub fn entries(&self) -> impl Iterator<Item = &ConfigEntry> {
        self.entries.values()
    }

    /// Iterates over the keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &ConfigKey> {
        self.entries.keys()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no entry was parsed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<ConfigEntry> for ConfigDocument {
    fn from_iter<I: IntoIterator<Item = ConfigEntry>>(iter: I) -> Self {
        let mut doc = ConfigDocument::new();
        for entry in iter {
            doc.insert(entry);
        }
        doc
    }
}

impl IntoIterator for ConfigDocument {
    type Item = ConfigEntry;
    type IntoIter = indexmap::map::IntoValues<ConfigKey, ConfigEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}
