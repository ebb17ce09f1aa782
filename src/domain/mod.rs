// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types.
//!
//! This module contains the value types of the crate: keys, values, parsed
//! documents, the typed agent configuration, and errors. It does no I/O.

pub mod config_key;
pub mod config_value;
pub mod document;
pub mod errors;
pub mod ua_config;

// Re-export commonly used types
pub use config_key::ConfigKey;
pub use config_value::ConfigValue;
pub use document::{ConfigDocument, ConfigEntry};
pub use errors::{ConfigError, Result};
pub use ua_config::UaConfig;
