// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration value type with type-safe conversions.
//!
//! Agent settings are stored as text exactly as parsed. Callers may also assign a
//! list of strings (for example several scan directories); lists are joined with `,`
//! when rendered for the agent.

use crate::domain::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Separator used when a list value is rendered as a single string.
pub const LIST_SEPARATOR: &str = ",";

/// A single agent setting value.
///
/// No coercion happens when a value is parsed: numeric-looking and boolean-looking
/// settings stay text until a typed reader is asked for them.
///
/// # Examples
///
/// ```
/// use uacfg::domain::config_value::ConfigValue;
///
/// let value = ConfigValue::from("42");
/// assert_eq!(value.as_u64("connectionTimeOutMinutes").unwrap(), 42);
///
/// let dirs = ConfigValue::from(vec!["/src", "/lib"]);
/// assert_eq!(dirs.render(), "/src,/lib");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A plain text value, possibly empty.
    Text(String),
    /// A caller-supplied collection of strings.
    List(Vec<String>),
}

impl ConfigValue {
    /// Creates a new text value.
    pub fn new(value: String) -> Self {
        ConfigValue::Text(value)
    }

    /// Returns the text if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(s) => Some(s),
            ConfigValue::List(_) => None,
        }
    }

    /// Returns the items if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            ConfigValue::Text(_) => None,
            ConfigValue::List(items) => Some(items),
        }
    }

    /// Renders the value the way the agent receives it: text as-is, lists joined with `,`.
    pub fn render(&self) -> Cow<'_, str> {
        match self {
            ConfigValue::Text(s) => Cow::Borrowed(s),
            ConfigValue::List(items) => Cow::Owned(items.join(LIST_SEPARATOR)),
        }
    }

    /// Returns `true` for an empty text value or an empty list.
    pub fn is_empty(&self) -> bool {
        match self {
            ConfigValue::Text(s) => s.is_empty(),
            ConfigValue::List(items) => items.is_empty(),
        }
    }

    /// Converts the rendered value to a boolean.
    ///
    /// Recognizes the following values (case-insensitive):
    /// - `true`: "true", "yes", "1", "on"
    /// - `false`: "false", "no", "0", "off"
    pub fn as_bool(&self, key: &str) -> Result<bool> {
        let rendered = self.render();
        match rendered.to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(true),
            "false" | "no" | "0" | "off" => Ok(false),
            _ => rendered
                .parse::<bool>()
                .map_err(|e| ConfigError::from_parse_bool_error(key.to_string(), e)),
        }
    }

    /// Converts the rendered value to an `i64`.
    pub fn as_i64(&self, key: &str) -> Result<i64> {
        self.render()
            .parse::<i64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Converts the rendered value to a `u64`.
    pub fn as_u64(&self, key: &str) -> Result<u64> {
        self.render()
            .parse::<u64>()
            .map_err(|e| ConfigError::from_parse_int_error(key.to_string(), e))
    }

    /// Parses the rendered value into any type that implements `FromStr`.
    ///
    /// # Examples
    ///
    /// ```
    /// use uacfg::domain::config_value::ConfigValue;
    /// use std::path::PathBuf;
    ///
    /// let value = ConfigValue::from("/var/log/ua");
    /// let path: PathBuf = value.parse("log.files.path").unwrap();
    /// assert_eq!(path, PathBuf::from("/var/log/ua"));
    /// ```
    pub fn parse<T>(&self, key: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        self.render()
            .parse::<T>()
            .map_err(|e| ConfigError::TypeConversionError {
                key: key.to_string(),
                target_type: std::any::type_name::<T>().to_string(),
                source: Box::new(e),
            })
    }
}

impl Default for ConfigValue {
    fn default() -> Self {
        ConfigValue::Text(String::new())
    }
}

impl From<String> for ConfigValue {
    fn from(s: String) -> Self {
        ConfigValue::Text(s)
    }
}

impl From<&str> for ConfigValue {
    fn from(s: &str) -> Self {
        ConfigValue::Text(s.to_string())
    }
}

impl From<bool> for ConfigValue {
    fn from(b: bool) -> Self {
        ConfigValue::Text(b.to_string())
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(items: Vec<String>) -> Self {
        ConfigValue::List(items)
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(items: Vec<&str>) -> Self {
        ConfigValue::List(items.into_iter().map(str::to_string).collect())
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
