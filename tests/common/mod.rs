// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixture helpers shared by the integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// Configuration used by the end-to-end examples.
#[allow(dead_code)]
pub const SAMPLE_CONF: &str = "apiKey=abc123\n#checkPolicies=true\nscanPath=/src\n";

/// Writes `content` to a fresh temporary file and returns it.
///
/// The file is deleted when the returned handle is dropped.
#[allow(dead_code)]
pub fn conf_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}
