// SPDX-License-Identifier: MIT OR Apache-2.0

//! Library file name decomposition.

use crate::domain::{ConfigError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

// Compiled once; the patterns are constants.
static SUFFIX_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.([A-Za-z0-9]+)$").expect("valid regex"));
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z0-9-]+)-").expect("valid regex"));
static VERSION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-([^-]+)\.[^.-]*$").expect("valid regex"));

/// The parts of a library file name such as `commons-lang3-3.12.0.jar`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilenameParts {
    /// Artifact name, everything before the version separator.
    pub name: String,
    /// Version, between the last `-` and the last `.`.
    pub version: String,
    /// Extension without the dot.
    pub suffix: String,
}

/// Splits a library file name into name, version and suffix.
///
/// # Errors
///
/// Returns `ConfigError::ParseError` naming the missing part when the file name
/// does not follow `<name>-<version>.<suffix>`.
///
/// # Examples
///
/// ```
/// use uacfg::util::break_filename;
///
/// let parts = break_filename("commons-lang3-3.12.0.jar").unwrap();
/// assert_eq!(parts.name, "commons-lang3");
/// assert_eq!(parts.version, "3.12.0");
/// assert_eq!(parts.suffix, "jar");
/// ```
pub fn break_filename(filename: &str) -> Result<FilenameParts> {
    let capture = |re: &Regex, part: &str| -> Result<String> {
        re.captures(filename)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| ConfigError::ParseError {
                message: format!("No {} in file name '{}'", part, filename),
                source: None,
            })
    };

    Ok(FilenameParts {
        suffix: capture(&*SUFFIX_RE, "suffix")?,
        name: capture(&*NAME_RE, "name")?,
        version: capture(&*VERSION_RE, "version")?,
    })
}
