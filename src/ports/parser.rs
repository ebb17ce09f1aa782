// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration parser trait definition.
//!
//! This module defines the `ConfigParser` trait, which turns the text of a
//! configuration file into a `ConfigDocument`.

use crate::domain::{ConfigDocument, Result};

/// A trait for parsing configuration file content.
///
/// Implementations must apply last-write-wins for repeated keys; this is what
/// `ConfigDocument::insert` does.
///
/// # Examples
///
/// ```rust
/// use uacfg::ports::ConfigParser;
/// use uacfg::domain::{ConfigDocument, ConfigEntry, Result};
///
/// struct OneKeyPerLine;
///
/// impl ConfigParser for OneKeyPerLine {
///     fn parse(&self, content: &str) -> Result<ConfigDocument> {
///         Ok(content
///             .lines()
///             .filter(|l| !l.is_empty())
///             .map(|l| ConfigEntry::enabled(l, "true"))
///             .collect())
///     }
///
///     fn supported_extensions(&self) -> &[&str] {
///         &["flags"]
///     }
/// }
///
/// let doc = OneKeyPerLine.parse("verbose\nforce\n").unwrap();
/// assert_eq!(doc.len(), 2);
/// ```
pub trait ConfigParser {
    /// Parses configuration content into an ordered document.
    ///
    /// # Returns
    ///
    /// * `Ok(ConfigDocument)` - The parsed entries
    /// * `Err(ConfigError)` - The content could not be parsed
    fn parse(&self, content: &str) -> Result<ConfigDocument>;

    /// Returns the file extensions (without the leading dot) this parser supports.
    fn supported_extensions(&self) -> &[&str];

    /// Returns `true` if the file name ends with one of the supported extensions.
    fn supports_file(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .map(|(_, ext)| {
                self.supported_extensions()
                    .iter()
                    .any(|s| s.eq_ignore_ascii_case(ext))
            })
            .unwrap_or(false)
    }
}
