// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that define the interfaces
//! between the domain types and the adapters that read files and build environments.

pub mod parser;
pub mod renderer;

// Re-export commonly used types
pub use parser::ConfigParser;
pub use renderer::EnvRenderer;
