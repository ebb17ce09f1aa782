// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment renderer trait definition.
//!
//! This module defines the `EnvRenderer` trait, the port through which a typed
//! agent configuration becomes the environment of the agent process.

use crate::domain::UaConfig;
use std::collections::HashMap;

/// A trait for turning an agent configuration into a process environment.
///
/// Rendering never mutates the environment of the current process; it always
/// returns a fresh map.
pub trait EnvRenderer {
    /// Renders the configuration over the given base environment.
    ///
    /// Entries derived from the configuration replace base entries of the same name.
    fn render_with_base(
        &self,
        config: &UaConfig,
        base: HashMap<String, String>,
    ) -> HashMap<String, String>;

    /// Renders only the entries derived from the configuration.
    fn render_overrides(&self, config: &UaConfig) -> HashMap<String, String> {
        self.render_with_base(config, HashMap::new())
    }
}
