// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration key newtype for type-safe key handling.
//!
//! This module provides the `ConfigKey` type, which wraps a raw agent configuration
//! key (as written in the file, dots allowed) and knows how to derive the field name
//! and the environment variable name the agent expects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of every environment variable the agent reads its settings from.
pub const ENV_PREFIX: &str = "WS_";

/// A type-safe wrapper for agent configuration keys.
///
/// # Examples
///
/// ```
/// use uacfg::domain::config_key::ConfigKey;
///
/// let key = ConfigKey::from("python.resolveDependencies");
///
/// assert_eq!(key.normalized(), "python_resolveDependencies");
/// assert_eq!(key.env_var_name(), "WS_PYTHON_RESOLVEDEPENDENCIES");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigKey(String);

impl ConfigKey {
    /// Creates a new `ConfigKey` from a `String`.
    pub fn new(key: String) -> Self {
        ConfigKey(key)
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts the `ConfigKey` into its inner `String`.
    pub fn into_string(self) -> String {
        self.0
    }

    /// Returns the field name for this key: every `.` replaced by `_`.
    ///
    /// No other character is rewritten.
    pub fn normalized(&self) -> String {
        normalize(&self.0)
    }

    /// Returns the environment variable name the agent reads this key from.
    pub fn env_var_name(&self) -> String {
        env_var_name(&self.normalized())
    }

    /// Returns `true` if the normalized key is a plain identifier
    /// (ASCII letters, digits and underscores, not starting with a digit).
    ///
    /// # Examples
    ///
    /// ```
    /// use uacfg::domain::config_key::ConfigKey;
    ///
    /// assert!(ConfigKey::from("npm.runPreStep").is_field_name());
    /// assert!(!ConfigKey::from("excludes[0]").is_field_name());
    /// ```
    pub fn is_field_name(&self) -> bool {
        let normalized = self.normalized();
        let mut chars = normalized.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    }
}

/// Replaces every `.` in a raw key with `_`.
pub fn normalize(key: &str) -> String {
    key.replace('.', "_")
}

/// Builds the `WS_` environment variable name for an already normalized field name.
pub fn env_var_name(field: &str) -> String {
    format!("{}{}", ENV_PREFIX, field.to_uppercase())
}

impl From<String> for ConfigKey {
    fn from(s: String) -> Self {
        ConfigKey(s)
    }
}

impl From<&str> for ConfigKey {
    fn from(s: &str) -> Self {
        ConfigKey(s.to_string())
    }
}

impl From<ConfigKey> for String {
    fn from(key: ConfigKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ConfigKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_key_from_str() {
        let key = ConfigKey::from("scanPath");
        assert_eq!(key.as_str(), "scanPath");
    }

    #[test]
    fn test_config_key_into_string() {
        let key = ConfigKey::new("apiKey".to_string());
        let s: String = key.into();
        assert_eq!(s, "apiKey");
    }

    #[test]
    fn test_config_key_display() {
        let key = ConfigKey::from("maven.ignoredScopes");
        assert_eq!(format!("{}", key), "maven.ignoredScopes");
    }

    #[test]
    fn test_normalized_replaces_every_dot() {
        let key = ConfigKey::from("docker.aws.enable");
        assert_eq!(key.normalized(), "docker_aws_enable");
    }

    #[test]
    fn test_normalized_leaves_other_characters() {
        let key = ConfigKey::from("a-b.c");
        assert_eq!(key.normalized(), "a-b_c");
    }

    #[test]
    fn test_env_var_name_uppercases() {
        assert_eq!(ConfigKey::from("checkPolicies").env_var_name(), "WS_CHECKPOLICIES");
        assert_eq!(
            ConfigKey::from("check.policies").env_var_name(),
            "WS_CHECK_POLICIES"
        );
    }

    #[test]
    fn test_is_field_name() {
        assert!(ConfigKey::from("apiKey").is_field_name());
        assert!(ConfigKey::from("_private").is_field_name());
        assert!(ConfigKey::from("go.modules.resolveDependencies").is_field_name());
        assert!(!ConfigKey::from("1st").is_field_name());
        assert!(!ConfigKey::from("bad-key").is_field_name());
        assert!(!ConfigKey::from("").is_field_name());
    }

    #[test]
    fn test_config_key_hash() {
        let mut map = HashMap::new();
        map.insert(ConfigKey::from("userKey"), "value1");

        assert_eq!(map.get(&ConfigKey::from("userKey")), Some(&"value1"));
        assert_eq!(map.get(&ConfigKey::from("apiKey")), None);
    }
}
