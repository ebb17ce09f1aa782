// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable materializer.
//!
//! This module turns a typed agent configuration into the environment the agent
//! process is launched with: the current process environment overlaid with one
//! `WS_<FIELD>` variable per present field.

use crate::domain::UaConfig;
use crate::ports::EnvRenderer;
use std::collections::HashMap;
use std::env;

/// Renders a `UaConfig` as a process environment.
///
/// # Examples
///
/// ```rust
/// use uacfg::adapters::EnvVarMaterializer;
/// use uacfg::domain::UaConfig;
///
/// let mut config = UaConfig::new();
/// config.set("check_policies", "true");
///
/// let env = EnvVarMaterializer::new().to_env_map(&config);
/// assert_eq!(env.get("WS_CHECK_POLICIES").map(String::as_str), Some("true"));
/// ```
#[derive(Debug, Clone)]
pub struct EnvVarMaterializer {
    /// Whether the current process environment is used as the base
    inherit_env: bool,
}

impl EnvVarMaterializer {
    /// Creates a materializer that inherits the process environment.
    pub fn new() -> Self {
        Self { inherit_env: true }
    }

    /// Sets whether the current process environment is copied into the result.
    ///
    /// When disabled, `to_env_map` returns only the derived `WS_*` variables.
    pub fn inherit_env(mut self, enabled: bool) -> Self {
        self.inherit_env = enabled;
        self
    }

    /// Takes a snapshot of the current process environment.
    ///
    /// Variables whose name or value is not valid Unicode are left out;
    /// `AgentInvocation::to_command` lets the agent inherit them anyway.
    pub fn snapshot_env() -> HashMap<String, String> {
        let mut snapshot = HashMap::new();
        for (key, value) in env::vars_os() {
            match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => {
                    snapshot.insert(key, value);
                }
                (key, _) => {
                    tracing::debug!(
                        "Skipping non-Unicode environment variable {:?}",
                        key.unwrap_or_else(|k| k.to_string_lossy().into_owned())
                    );
                }
            }
        }
        snapshot
    }

    /// Renders the configuration over a snapshot of the process environment.
    ///
    /// Derived variables win over inherited ones. The process environment is not
    /// modified.
    pub fn to_env_map(&self, config: &UaConfig) -> HashMap<String, String> {
        let base = if self.inherit_env {
            Self::snapshot_env()
        } else {
            HashMap::new()
        };
        self.render_with_base(config, base)
    }
}

impl Default for EnvVarMaterializer {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvRenderer for EnvVarMaterializer {
    fn render_with_base(
        &self,
        config: &UaConfig,
        mut base: HashMap<String, String>,
    ) -> HashMap<String, String> {
        let inherited = base.len();
        let mut derived = 0usize;
        for (name, value) in config.env_entries() {
            base.insert(name, value);
            derived += 1;
        }
        tracing::debug!(
            "Rendered agent environment: {} inherited variables, {} derived",
            inherited,
            derived
        );
        base
    }
}
