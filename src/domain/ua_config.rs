// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed agent configuration.
//!
//! `UaConfig` holds one field per normalized key of a parsed configuration file.
//! The field set is data driven, so it is an ordered string-keyed container rather
//! than a fixed struct.

use crate::domain::config_key::{self, ConfigKey};
use crate::domain::{ConfigDocument, ConfigValue};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Agent configuration with one field per normalized key.
///
/// A field may be present but absent-valued (`None`); such fields are skipped when
/// the configuration is rendered as environment variables. An empty string is a
/// value, not an absence.
///
/// Every accessor normalizes the name it is given, so `wss.url` and `wss_url`
/// address the same field.
///
/// # Examples
///
/// ```
/// use uacfg::domain::{ConfigDocument, ConfigEntry, UaConfig};
///
/// let doc: ConfigDocument = vec![
///     ConfigEntry::enabled("wss.url", "https://saas.whitesourcesoftware.com/agent"),
///     ConfigEntry::disabled("checkPolicies"),
/// ]
/// .into_iter()
/// .collect();
///
/// let config = UaConfig::from_document(&doc);
/// assert_eq!(config.get_str("wss_url"), Some("https://saas.whitesourcesoftware.com/agent"));
/// assert_eq!(config.get_str("checkPolicies"), Some(""));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UaConfig {
    fields: IndexMap<String, Option<ConfigValue>>,
}

impl UaConfig {
    /// Creates a configuration with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Materializes a parsed document.
    ///
    /// Each entry becomes the field `key.replace('.', '_')`; disabled entries hold
    /// an empty string. When two keys normalize to the same field name the later
    /// entry wins.
    pub fn from_document(document: &ConfigDocument) -> Self {
        let mut config = Self::new();
        for entry in document.entries() {
            if !entry.key.is_field_name() {
                tracing::warn!(
                    "Configuration key '{}' does not form a plain field name; keeping it unchanged",
                    entry.key
                );
            }
            let field = entry.key.normalized();
            let value = ConfigValue::from(entry.effective_value());
            if let Some(previous) = config.fields.insert(field.clone(), Some(value)) {
                tracing::debug!(
                    "Field '{}' set again by key '{}' (previous value {:?})",
                    field,
                    entry.key,
                    previous
                );
            }
        }
        tracing::debug!(
            "Materialized {} fields from {} configuration entries",
            config.len(),
            document.len()
        );
        config
    }

    /// Returns the value of a field, or `None` when it is missing or absent-valued.
    pub fn get(&self, name: &str) -> Option<&ConfigValue> {
        self.fields
            .get(&config_key::normalize(name))
            .and_then(Option::as_ref)
    }

    /// Returns the text of a text field.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(ConfigValue::as_text)
    }

    /// Returns the value of the field a raw key maps to.
    pub fn get_key(&self, key: &ConfigKey) -> Option<&ConfigValue> {
        self.get(key.as_str())
    }

    /// Returns `true` if the field exists, even with an absent value.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(&config_key::normalize(name))
    }

    /// Sets a field, adding it at the end if it does not exist yet.
    ///
    /// Returns the previous value.
    pub fn set(&mut self, name: &str, value: impl Into<ConfigValue>) -> Option<ConfigValue> {
        self.fields
            .insert(config_key::normalize(name), Some(value.into()))
            .flatten()
    }

    /// Marks a field as absent so it is not rendered. The field is kept.
    pub fn clear(&mut self, name: &str) -> Option<ConfigValue> {
        self.fields
            .insert(config_key::normalize(name), None)
            .flatten()
    }

    /// Removes a field entirely, preserving the order of the others.
    pub fn remove(&mut self, name: &str) -> Option<ConfigValue> {
        self.fields
            .shift_remove(&config_key::normalize(name))
            .flatten()
    }

    /// Iterates over field names and values in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&ConfigValue>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    /// Iterates over the field names in insertion order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Returns the `WS_*` variables derived from every present field.
    ///
    /// Absent fields are skipped; lists are joined with `,`.
    pub fn env_entries(&self) -> impl Iterator<Item = (String, String)> + '_ {
        self.fields.iter().filter_map(|(field, value)| {
            value
                .as_ref()
                .map(|v| (config_key::env_var_name(field), v.render().into_owned()))
        })
    }

    /// Number of fields, absent ones included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<&ConfigDocument> for UaConfig {
    fn from(document: &ConfigDocument) -> Self {
        UaConfig::from_document(document)
    }
}
