// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the agent configuration crate.
//!
//! This module defines the error types that can occur when reading agent configuration
//! files, converting values, and preparing agent invocations. All errors use `thiserror`.

use std::num::ParseIntError;
use std::path::PathBuf;
use std::str::ParseBoolError;
use thiserror::Error;

/// The main error type for configuration operations.
///
/// Malformed configuration lines and normalized-key collisions are deliberately not
/// represented here: both are tolerated silently by the parser.
///
/// # Examples
///
/// ```
/// use uacfg::domain::errors::ConfigError;
///
/// fn lookup_token_type() -> Result<(), ConfigError> {
///     Err(ConfigError::UnsupportedTokenType {
///         token_type: "product".to_string(),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The configuration or report file does not exist or cannot be read.
    #[error("File not found or unreadable: {}", path.display())]
    NotFound {
        /// The path that could not be read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to convert a configuration value to the requested type.
    #[error(
        "Failed to convert configuration value for key '{key}' to type {target_type}: {source}"
    )]
    TypeConversionError {
        /// The key being converted
        key: String,
        /// The target type name
        target_type: String,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failed to parse a report file, file name, or value.
    #[error("Failed to parse: {message}")]
    ParseError {
        /// The error message
        message: String,
        /// The underlying parsing error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The requested token type cannot drive the agent.
    #[error("Unsupported token type '{token_type}': only organization tokens are supported")]
    UnsupportedTokenType {
        /// The rejected token type
        token_type: String,
    },

    /// The language has no entry in the library metadata table.
    #[error("Unsupported language '{language}'")]
    UnsupportedLanguage {
        /// The language that was looked up
        language: String,
    },

    /// A scan was requested but none of its inputs are usable.
    #[error("Nothing to scan: {message}")]
    NothingToScan {
        /// Why the scan cannot proceed
        message: String,
    },

    /// An I/O error occurred outside of file loading.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ConfigError {
    /// Creates a NotFound error for the given path.
    pub fn not_found(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::NotFound {
            path: path.into(),
            source,
        }
    }

    /// Creates a TypeConversionError from a ParseIntError.
    pub fn from_parse_int_error(key: String, err: ParseIntError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "integer".to_string(),
            source: Box::new(err),
        }
    }

    /// Creates a TypeConversionError from a ParseBoolError.
    pub fn from_parse_bool_error(key: String, err: ParseBoolError) -> Self {
        ConfigError::TypeConversionError {
            key,
            target_type: "boolean".to_string(),
            source: Box::new(err),
        }
    }
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
