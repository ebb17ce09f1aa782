// SPDX-License-Identifier: MIT OR Apache-2.0

//! Agent configuration file adapter.
//!
//! This module provides the parser for the agent's `key=value` configuration format
//! and an adapter that loads such a file from disk.

use crate::domain::{ConfigDocument, ConfigEntry, ConfigError, Result, UaConfig};
use crate::ports::ConfigParser;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// Parser for the agent's `key=value` configuration format.
///
/// Each line is trimmed and split on its first `=`. A key starting with `#` is
/// kept as a disabled entry with an empty value. Lines without `=` are skipped
/// without error, so blank lines and prose comments are tolerated.
///
/// # Examples
///
/// ```rust
/// use uacfg::adapters::PropertiesParser;
/// use uacfg::ports::ConfigParser;
///
/// let parser = PropertiesParser::new();
/// let doc = parser.parse("apiKey=abc123\n#checkPolicies=true\n").unwrap();
///
/// assert_eq!(doc.get("apiKey").unwrap().value, "abc123");
/// assert!(!doc.get("checkPolicies").unwrap().enabled);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertiesParser;

impl PropertiesParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        PropertiesParser
    }

    /// Parses one line. Returns `None` for lines that carry no entry.
    pub fn parse_line(line: &str) -> Option<ConfigEntry> {
        let (raw_key, raw_value) = line.trim().split_once('=')?;
        let entry = ConfigEntry::from_raw(raw_key, raw_value);
        if entry.key.as_str().is_empty() {
            tracing::debug!("Skipping configuration line with an empty key");
            return None;
        }
        Some(entry)
    }
}

impl ConfigParser for PropertiesParser {
    fn parse(&self, content: &str) -> Result<ConfigDocument> {
        let mut doc = ConfigDocument::new();
        let mut skipped = 0usize;
        for line in content.lines() {
            match Self::parse_line(line) {
                Some(entry) => {
                    doc.insert(entry);
                }
                None => skipped += 1,
            }
        }
        tracing::debug!(
            "Parsed {} configuration keys ({} lines without an entry)",
            doc.len(),
            skipped
        );
        Ok(doc)
    }

    fn supported_extensions(&self) -> &[&str] {
        &["config", "properties"]
    }
}

/// Adapter that loads an agent configuration file from disk.
///
/// # Examples
///
/// ```rust,no_run
/// use uacfg::adapters::UaConfFileAdapter;
///
/// let adapter = UaConfFileAdapter::from_file("/opt/ua/wss-unified-agent.config").unwrap();
/// let config = adapter.to_config();
/// ```
#[derive(Debug, Clone)]
pub struct UaConfFileAdapter {
    /// Path to the configuration file
    file_path: PathBuf,
    /// Parsed entries
    document: ConfigDocument,
    /// Line parser
    parser: PropertiesParser,
}

impl UaConfFileAdapter {
    /// Loads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist or cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file_path = path.as_ref().to_path_buf();
        let parser = PropertiesParser::new();
        let document = Self::load(&parser, &file_path)?;

        Ok(Self {
            file_path,
            document,
            parser,
        })
    }

    // Bytes that are not valid UTF-8 become U+FFFD; they mostly appear in
    // comment lines, which carry no entry anyway.
    fn load(parser: &PropertiesParser, path: &Path) -> Result<ConfigDocument> {
        let bytes = fs::read(path).map_err(|e| ConfigError::not_found(path, e))?;
        let content = String::from_utf8_lossy(&bytes);
        if let Cow::Owned(_) = content {
            tracing::debug!(
                "Replaced invalid UTF-8 sequences while reading {}",
                path.display()
            );
        }
        tracing::debug!("Loaded agent configuration from {}", path.display());
        parser.parse(&content)
    }

    /// Re-reads the file, replacing the parsed entries.
    pub fn reload(&mut self) -> Result<()> {
        self.document = Self::load(&self.parser, &self.file_path)?;
        Ok(())
    }

    /// Returns the path of the configuration file.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Returns the parsed entries.
    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Consumes the adapter, returning the parsed entries.
    pub fn into_document(self) -> ConfigDocument {
        self.document
    }

    /// Materializes the parsed entries into a typed configuration.
    pub fn to_config(&self) -> UaConfig {
        UaConfig::from_document(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ConfigKey;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_simple() {
        let doc = PropertiesParser::new().parse("key=value").unwrap();
        assert_eq!(doc.get("key").unwrap().value, "value");
    }

    #[test]
    fn test_parse_trims_line_only() {
        let doc = PropertiesParser::new().parse("   scanPath=/src   \n").unwrap();
        assert_eq!(doc.get("scanPath").unwrap().value, "/src");

        let doc = PropertiesParser::new().parse("a = b").unwrap();
        assert_eq!(doc.get("a ").unwrap().value, " b");
    }

    #[test]
    fn test_parse_splits_on_first_equals() {
        let doc = PropertiesParser::new()
            .parse("proxy.url=http://host/?a=b")
            .unwrap();
        assert_eq!(doc.get("proxy.url").unwrap().value, "http://host/?a=b");
    }

    #[test]
    fn test_parse_empty_value() {
        let doc = PropertiesParser::new().parse("projectToken=").unwrap();
        let entry = doc.get("projectToken").unwrap();
        assert!(entry.enabled);
        assert_eq!(entry.value, "");
    }

    #[test]
    fn test_parse_disabled_key() {
        let doc = PropertiesParser::new()
            .parse("#checkPolicies=true")
            .unwrap();
        let entry = doc.get("checkPolicies").unwrap();
        assert!(!entry.enabled);
        assert_eq!(entry.value, "");
    }

    #[test]
    fn test_parse_skips_lines_without_equals() {
        let content = "\n# Organization settings\n\napiKey=abc\njust some text\n";
        let doc = PropertiesParser::new().parse(content).unwrap();
        assert_eq!(doc.len(), 1);
        let keys: Vec<&ConfigKey> = doc.keys().collect();
        assert_eq!(keys, vec![&ConfigKey::from("apiKey")]);
    }

    #[test]
    fn test_adapter_tolerates_non_utf8_comment() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"# Configuraci\xf3n del agente\napiKey=abc123\n")
            .unwrap();
        file.flush().unwrap();

        let adapter = UaConfFileAdapter::from_file(file.path()).unwrap();
        assert_eq!(adapter.document().len(), 1);
        assert_eq!(adapter.document().get("apiKey").unwrap().value, "abc123");
    }

    #[test]
    fn test_adapter_keeps_entry_with_non_utf8_value() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"projectName=caf\xe9\nscanPath=/src\n").unwrap();
        file.flush().unwrap();

        let doc = UaConfFileAdapter::from_file(file.path())
            .unwrap()
            .into_document();
        assert_eq!(doc.get("projectName").unwrap().value, "caf\u{FFFD}");
        assert_eq!(doc.get("scanPath").unwrap().value, "/src");
    }

    #[test]
    fn test_parse_skips_empty_keys() {
        let doc = PropertiesParser::new().parse("=orphan\n#=orphan\n").unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_last_write_wins() {
        let doc = PropertiesParser::new().parse("a=1\na=2").unwrap();
        assert_eq!(doc.get("a").unwrap().value, "2");
    }

    #[test]
    fn test_parse_windows_line_endings() {
        let doc = PropertiesParser::new().parse("a=1\r\nb=2\r\n").unwrap();
        assert_eq!(doc.get("a").unwrap().value, "1");
        assert_eq!(doc.get("b").unwrap().value, "2");
    }

    #[test]
    fn test_supported_extensions() {
        let parser = PropertiesParser::default();
        assert!(parser.supports_file("wss-unified-agent.config"));
        assert!(parser.supports_file("agent.properties"));
        assert!(!parser.supports_file("agent.yaml"));
    }

    #[test]
    fn test_adapter_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "apiKey=abc123\n#checkPolicies=true\nscanPath=/src").unwrap();

        let adapter = UaConfFileAdapter::from_file(temp_file.path()).unwrap();
        assert_eq!(adapter.file_path(), temp_file.path());
        assert_eq!(adapter.document().len(), 3);

        let config = adapter.to_config();
        assert_eq!(config.get_str("apiKey"), Some("abc123"));
        assert_eq!(config.get_str("checkPolicies"), Some(""));
        assert_eq!(config.get_str("scanPath"), Some("/src"));
    }

    #[test]
    fn test_adapter_reload() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        fs::write(&path, "offline=false\n").unwrap();

        let mut adapter = UaConfFileAdapter::from_file(&path).unwrap();
        assert_eq!(adapter.document().get("offline").unwrap().value, "false");

        fs::write(&path, "offline=true\n").unwrap();
        adapter.reload().unwrap();
        assert_eq!(adapter.document().get("offline").unwrap().value, "true");
    }

    #[test]
    fn test_adapter_nonexistent_file() {
        let result = UaConfFileAdapter::from_file("/nonexistent/path/wss-unified-agent.config");
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_adapter_reload_after_delete_fails() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        fs::write(&path, "a=1\n").unwrap();

        let mut adapter = UaConfFileAdapter::from_file(&path).unwrap();
        drop(temp_file);

        assert!(matches!(adapter.reload(), Err(ConfigError::NotFound { .. })));
        assert_eq!(adapter.document().get("a").unwrap().value, "1");
    }
}
