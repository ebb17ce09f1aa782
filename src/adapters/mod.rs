// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing implementations of the ports.
//!
//! This module contains the concrete file parser and environment renderer for the
//! agent configuration format.

pub mod env_var;
pub mod properties_file;

pub use env_var::EnvVarMaterializer;
pub use properties_file::{PropertiesParser, UaConfFileAdapter};
