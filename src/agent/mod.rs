// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unified Agent installation layout and scan preparation.
//!
//! `AgentSettings` knows where the agent jar, its configuration file and its
//! output directory live. It loads the configuration file, applies the settings a
//! scripted run always needs (credentials, server URL, offline mode), and builds
//! the invocation that launches the agent.

pub mod reports;
pub mod scan;

pub use reports::UaReport;
pub use scan::{AgentInvocation, AgentOutput, ScanRequest, ScanTarget};

use crate::adapters::{EnvVarMaterializer, UaConfFileAdapter};
use crate::catalog::TokenType;
use crate::domain::{ConfigError, ConfigValue, Result, UaConfig};
use crate::util::full_ws_url;
use directories::ProjectDirs;
use indexmap::IndexSet;
use std::path::{Path, PathBuf};

/// File name of the agent jar inside the agent directory.
pub const UA_JAR_FNAME: &str = "wss-unified-agent.jar";

/// File name of the agent configuration inside the agent directory.
pub const UA_CONF_FNAME: &str = "wss-unified-agent.config";

/// Directory, relative to the agent directory, where the agent writes its reports.
pub const UA_OUTPUT_DIR: &str = "whitesource";

/// Suffix appended to the platform URL to reach the agent endpoint.
pub const AGENT_URL_SUFFIX: &str = "/agent";

/// Credentials and server used for a scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    /// User key of the account running the scan
    pub user_key: String,
    /// Token of the scope the scan reports to
    pub token: String,
    /// Scope of `token`
    pub token_type: TokenType,
    /// Platform URL or hosted alias; `None` means the default hosted instance
    pub url: Option<String>,
}

impl Credentials {
    /// Creates organization-scoped credentials for the default hosted instance.
    pub fn organization(user_key: impl Into<String>, org_token: impl Into<String>) -> Self {
        Self {
            user_key: user_key.into(),
            token: org_token.into(),
            token_type: TokenType::Organization,
            url: None,
        }
    }

    /// Sets the platform URL or hosted alias.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Location of an agent installation.
///
/// # Examples
///
/// ```rust
/// use uacfg::agent::AgentSettings;
/// use std::path::Path;
///
/// let settings = AgentSettings::new("/opt/ua");
/// assert_eq!(settings.jar_path(), Path::new("/opt/ua/wss-unified-agent.jar"));
/// assert_eq!(settings.output_dir(), Path::new("/opt/ua/whitesource"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentSettings {
    ua_path: PathBuf,
    jar_path: PathBuf,
    conf_path: PathBuf,
}

impl AgentSettings {
    /// Uses `ua_path` as the agent directory, with the jar and configuration inside it.
    pub fn new(ua_path: impl Into<PathBuf>) -> Self {
        let ua_path = ua_path.into();
        Self {
            jar_path: ua_path.join(UA_JAR_FNAME),
            conf_path: ua_path.join(UA_CONF_FNAME),
            ua_path,
        }
    }

    /// Uses the per-user data directory of the agent as the agent directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no home directory can be determined.
    pub fn default_location() -> Result<Self> {
        let proj_dirs = ProjectDirs::from("com", "whitesource", "unified-agent").ok_or_else(|| {
            ConfigError::not_found(
                "unified-agent",
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "failed to determine project directories",
                ),
            )
        })?;
        Ok(Self::new(proj_dirs.data_dir()))
    }

    /// Overrides the jar location.
    pub fn with_jar_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.jar_path = path.into();
        self
    }

    /// Overrides the configuration file location.
    pub fn with_conf_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.conf_path = path.into();
        self
    }

    /// The agent directory.
    pub fn ua_path(&self) -> &Path {
        &self.ua_path
    }

    /// The agent jar.
    pub fn jar_path(&self) -> &Path {
        &self.jar_path
    }

    /// The agent configuration file.
    pub fn conf_path(&self) -> &Path {
        &self.conf_path
    }

    /// Temporary directory handed to the JVM.
    pub fn java_temp_dir(&self) -> &Path {
        &self.ua_path
    }

    /// Directory the agent writes its reports to.
    pub fn output_dir(&self) -> PathBuf {
        self.ua_path.join(UA_OUTPUT_DIR)
    }

    /// Loads the configuration file and applies the credentials.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnsupportedTokenType` for non-organization credentials
    /// and `ConfigError::NotFound` if the configuration file cannot be read.
    pub fn load_config(&self, credentials: &Credentials) -> Result<UaConfig> {
        if credentials.token_type != TokenType::Organization {
            tracing::error!("Unsupported token type. Only organization tokens are supported");
            return Err(ConfigError::UnsupportedTokenType {
                token_type: credentials.token_type.to_string(),
            });
        }
        let mut config = UaConfFileAdapter::from_file(&self.conf_path)?.to_config();
        apply_credentials(&mut config, credentials);
        Ok(config)
    }

    /// Builds the invocation for a scan.
    ///
    /// Directories that do not exist are skipped with a warning. The configuration
    /// is not modified; the offline override applies to a copy.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NothingToScan` if none of the directories exist.
    pub fn prepare_scan(&self, config: &UaConfig, request: &ScanRequest) -> Result<AgentInvocation> {
        let existing: IndexSet<&Path> = request
            .dirs
            .iter()
            .map(PathBuf::as_path)
            .filter(|dir| {
                let exists = dir.exists();
                if !exists {
                    tracing::warn!("Directory: {} was not found. Skipping", dir.display());
                }
                exists
            })
            .collect();

        if existing.is_empty() {
            tracing::warn!("Nothing was scanned");
            return Err(ConfigError::NothingToScan {
                message: format!("none of {} requested directories exist", request.dirs.len()),
            });
        }

        let dirs = existing
            .iter()
            .map(|d| d.to_string_lossy())
            .collect::<Vec<_>>()
            .join(",");
        tracing::info!("Scanning Dir(s): {}", dirs);

        let mut local_config = config.clone();
        if let Some(offline) = request.offline {
            set_override(&mut local_config, "Offline", offline);
        }

        let mut options = vec!["-d".to_string(), dirs];
        options.extend(request.target.to_args());
        Ok(self.invocation(options, &local_config))
    }

    /// Builds the invocation that prints the agent version.
    pub fn version_invocation(&self, config: &UaConfig) -> AgentInvocation {
        self.invocation(vec!["-v".to_string()], config)
    }

    /// Reads and parses one of the reports the agent leaves in its output directory.
    pub fn read_report(&self, report: UaReport) -> Result<serde_json::Value> {
        report.read_from(&self.output_dir())
    }

    fn invocation(&self, options: Vec<String>, config: &UaConfig) -> AgentInvocation {
        let mut args = vec![
            format!("-Djava.io.tmpdir={}", self.java_temp_dir().display()),
            "-jar".to_string(),
            self.jar_path.display().to_string(),
        ];
        args.extend(options);
        AgentInvocation {
            program: "java".to_string(),
            args,
            env: EnvVarMaterializer::new().to_env_map(config),
        }
    }
}

/// Applies credentials and the fixed settings of a scripted run.
///
/// Sets `apiKey`, `userKey`, `wss_url`, `Offline=true` and `noConfig=true`, plus
/// `logLevel=debug` when debug logging is enabled.
pub fn apply_credentials(config: &mut UaConfig, credentials: &Credentials) {
    set_override(config, "apiKey", credentials.token.as_str());
    set_override(config, "userKey", credentials.user_key.as_str());
    set_override(
        config,
        "wss_url",
        format!("{}{}", full_ws_url(credentials.url.as_deref()), AGENT_URL_SUFFIX),
    );
    set_override(config, "Offline", true);
    set_override(config, "noConfig", true);
    if tracing::enabled!(tracing::Level::DEBUG) {
        set_override(config, "logLevel", "debug");
    }
}

// Replaces a field that differs only by case, so both spellings cannot reach the
// same WS_ variable.
fn set_override(config: &mut UaConfig, name: &str, value: impl Into<ConfigValue>) {
    let field = config
        .field_names()
        .find(|f| f.eq_ignore_ascii_case(name))
        .unwrap_or(name)
        .to_string();
    config.set(&field, value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn install(conf: &str) -> (TempDir, AgentSettings) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(UA_CONF_FNAME), conf).unwrap();
        let settings = AgentSettings::new(dir.path());
        (dir, settings)
    }

    #[test]
    fn test_default_paths() {
        let settings = AgentSettings::new("/opt/ua");
        assert_eq!(settings.conf_path(), Path::new("/opt/ua/wss-unified-agent.config"));
        assert_eq!(settings.java_temp_dir(), Path::new("/opt/ua"));
    }

    #[test]
    fn test_path_overrides() {
        let settings = AgentSettings::new("/opt/ua")
            .with_jar_path("/jars/ua.jar")
            .with_conf_path("/etc/ua.config");
        assert_eq!(settings.jar_path(), Path::new("/jars/ua.jar"));
        assert_eq!(settings.conf_path(), Path::new("/etc/ua.config"));
        assert_eq!(settings.ua_path(), Path::new("/opt/ua"));
    }

    #[test]
    fn test_load_config_applies_credentials() {
        let (_dir, settings) = install("apiKey=\noffline=false\nprojectName=demo\n");
        let creds = Credentials::organization("user-key", "org-token").with_url("app-eu");

        let config = settings.load_config(&creds).unwrap();
        assert_eq!(config.get_str("apiKey"), Some("org-token"));
        assert_eq!(config.get_str("userKey"), Some("user-key"));
        assert_eq!(
            config.get_str("wss_url"),
            Some("https://app-eu.whitesourcesoftware.com/agent")
        );
        assert_eq!(config.get_str("noConfig"), Some("true"));
        assert_eq!(config.get_str("projectName"), Some("demo"));
        // the existing lowercase field is replaced rather than duplicated
        assert_eq!(config.get_str("offline"), Some("true"));
        assert!(!config.field_names().any(|f| f == "Offline"));
    }

    #[test]
    fn test_load_config_rejects_product_token() {
        let (_dir, settings) = install("apiKey=\n");
        let mut creds = Credentials::organization("u", "t");
        creds.token_type = TokenType::Product;

        let result = settings.load_config(&creds);
        assert!(matches!(result, Err(ConfigError::UnsupportedTokenType { .. })));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let settings = AgentSettings::new(dir.path());
        let result = settings.load_config(&Credentials::organization("u", "t"));
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[test]
    fn test_prepare_scan() {
        let (dir, settings) = install("apiKey=k\n");
        let src = dir.path().join("src");
        fs::create_dir(&src).unwrap();
        let missing = dir.path().join("missing");

        let config = settings.load_config(&Credentials::organization("u", "t")).unwrap();
        let request = ScanRequest::new(
            vec![src.clone(), missing, src.clone()],
            ScanTarget::ProjectToken("p".repeat(64)),
        )
        .offline(false);

        let invocation = settings.prepare_scan(&config, &request).unwrap();
        assert_eq!(invocation.program, "java");
        assert_eq!(invocation.args[1], "-jar");
        assert_eq!(invocation.args[3], "-d");
        assert_eq!(invocation.args[4], src.display().to_string());
        assert_eq!(invocation.args[5], "-projectToken");
        assert_eq!(invocation.env.get("WS_OFFLINE"), Some(&"false".to_string()));
        // the caller's configuration keeps its own offline value
        assert_eq!(config.get_str("Offline"), Some("true"));
    }

    #[test]
    fn test_prepare_scan_without_existing_dirs() {
        let (dir, settings) = install("apiKey=k\n");
        let config = UaConfig::new();
        let request = ScanRequest::new(
            vec![dir.path().join("nope")],
            ScanTarget::ProductName("demo".to_string()),
        );

        let result = settings.prepare_scan(&config, &request);
        assert!(matches!(result, Err(ConfigError::NothingToScan { .. })));
    }

    #[test]
    fn test_version_invocation() {
        let settings = AgentSettings::new("/opt/ua");
        let invocation = settings.version_invocation(&UaConfig::new());
        assert_eq!(invocation.args.last().map(String::as_str), Some("-v"));
        assert_eq!(invocation.args[0], "-Djava.io.tmpdir=/opt/ua");
    }
}
