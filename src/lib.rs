// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration tooling for the Unified Agent of a software-composition-analysis
//! platform.
//!
//! The agent reads its settings from a `key=value` file and from `WS_*` environment
//! variables. This crate parses that file into a typed, ordered configuration,
//! lets scripts adjust it, and renders it as the environment the agent is launched
//! with.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types (`ConfigKey`, `ConfigValue`, `ConfigDocument`, `UaConfig`, errors)
//! - **Ports**: Trait definitions (`ConfigParser`, `EnvRenderer`)
//! - **Adapters**: The agent file format parser and the environment materializer
//! - **Agent**: Installation layout, credentials, scan invocations, reports
//!
//! Static tables (`catalog`) and string helpers (`util`) complete the SDK surface.
//!
//! # Feature Flags
//!
//! - `cli`: Build the `uacfg` command line tool (default)
//!
//! # Quick Start
//!
//! ```rust,no_run
//! # fn main() -> uacfg::domain::Result<()> {
//! let document = uacfg::parse_file("/opt/ua/wss-unified-agent.config")?;
//! let mut config = uacfg::to_object(&document);
//! config.set("projectName", "nightly");
//!
//! let env = uacfg::to_env_map(&config);
//! assert_eq!(env.get("WS_PROJECTNAME").map(String::as_str), Some("nightly"));
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod agent;
pub mod catalog;
pub mod domain;
pub mod ports;
pub mod util;

use std::collections::HashMap;
use std::path::Path;

/// Parses an agent configuration file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist or cannot be read.
pub fn parse_file<P: AsRef<Path>>(path: P) -> domain::Result<domain::ConfigDocument> {
    Ok(adapters::UaConfFileAdapter::from_file(path)?.into_document())
}

/// Materializes a parsed document into a typed configuration.
pub fn to_object(document: &domain::ConfigDocument) -> domain::UaConfig {
    domain::UaConfig::from_document(document)
}

/// Renders a configuration over a snapshot of the current process environment.
pub fn to_env_map(config: &domain::UaConfig) -> HashMap<String, String> {
    adapters::EnvVarMaterializer::new().to_env_map(config)
}

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{EnvVarMaterializer, PropertiesParser, UaConfFileAdapter};
    pub use crate::agent::{AgentSettings, Credentials, ScanRequest, ScanTarget, UaReport};
    pub use crate::domain::{
        ConfigDocument, ConfigEntry, ConfigError, ConfigKey, ConfigValue, Result, UaConfig,
    };
    pub use crate::ports::{ConfigParser, EnvRenderer};
}
