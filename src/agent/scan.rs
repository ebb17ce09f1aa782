// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scan requests and agent process invocations.

use crate::domain::Result;
use crate::util::is_token;
use std::collections::HashMap;
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::process::Command;

/// Where the results of a scan are reported.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanTarget {
    /// An existing project, by token.
    ProjectToken(String),
    /// An existing product, by token.
    ProductToken(String),
    /// A product by name; the platform creates it if needed.
    ProductName(String),
}

impl ScanTarget {
    /// Command line arguments selecting this target.
    pub fn to_args(&self) -> Vec<String> {
        let (flag, value) = match self {
            ScanTarget::ProjectToken(t) => ("-projectToken", t),
            ScanTarget::ProductToken(t) => ("-productToken", t),
            ScanTarget::ProductName(n) => ("-product", n),
        };
        if matches!(self, ScanTarget::ProjectToken(_) | ScanTarget::ProductToken(_))
            && !is_token(value)
        {
            tracing::warn!("{} value does not look like a token", flag);
        }
        vec![flag.to_string(), value.clone()]
    }
}

/// A request to scan one or more directories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanRequest {
    /// Directories to scan
    pub dirs: Vec<PathBuf>,
    /// Where results are reported
    pub target: ScanTarget,
    /// Overrides the configured offline mode when set
    pub offline: Option<bool>,
}

impl ScanRequest {
    /// Creates a request that keeps the configured offline mode.
    pub fn new(dirs: Vec<PathBuf>, target: ScanTarget) -> Self {
        Self {
            dirs,
            target,
            offline: None,
        }
    }

    /// Overrides the offline mode for this scan only.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = Some(offline);
        self
    }
}

/// A fully prepared agent process: program, arguments and complete environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentInvocation {
    /// Executable to run
    pub program: String,
    /// Arguments, in order
    pub args: Vec<String>,
    /// The environment of the process, apart from inherited variables that are not
    /// valid Unicode
    pub env: HashMap<String, String>,
}

impl AgentInvocation {
    /// Builds a `Command` whose environment is `env`.
    ///
    /// Inherited variables that `env` cannot hold (non-Unicode name or value) are
    /// passed through unchanged; every other inherited variable missing from `env`
    /// is removed.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        for (key, value) in env::vars_os() {
            if let (Some(key), Some(_)) = (key.to_str(), value.to_str()) {
                if !self.env.contains_key(key) {
                    command.env_remove(key);
                }
            }
        }
        command.envs(&self.env);
        command
    }

    /// Runs the agent to completion and captures its standard output.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::IoError` if the process cannot be started.
    pub fn run(&self) -> Result<AgentOutput> {
        tracing::debug!("Running command: {}", self);
        let output = self.to_command().output()?;
        let result = AgentOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        };
        tracing::debug!("Agent exited with status {:?}", result.status);
        Ok(result)
    }
}

impl fmt::Display for AgentInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Result of running the agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AgentOutput {
    /// Exit code; `None` if the process was terminated by a signal
    pub status: Option<i32>,
    /// Standard output, lossily decoded as UTF-8
    pub stdout: String,
}

impl AgentOutput {
    /// Returns `true` if the agent exited with code 0.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Interprets the output of a `-v` run as a version string.
    pub fn version(&self) -> &str {
        self.stdout.trim_end_matches(['\r', '\n'])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_target_args() {
        assert_eq!(
            ScanTarget::ProductName("My Product".to_string()).to_args(),
            vec!["-product", "My Product"]
        );
        assert_eq!(
            ScanTarget::ProductToken("t".to_string()).to_args(),
            vec!["-productToken", "t"]
        );
    }

    #[test]
    fn test_scan_request_offline() {
        let request = ScanRequest::new(vec![], ScanTarget::ProductName("p".to_string()));
        assert_eq!(request.offline, None);
        assert_eq!(request.offline(true).offline, Some(true));
    }

    #[test]
    fn test_invocation_display() {
        let invocation = AgentInvocation {
            program: "java".to_string(),
            args: vec!["-jar".to_string(), "ua.jar".to_string(), "-v".to_string()],
            env: HashMap::new(),
        };
        assert_eq!(invocation.to_string(), "java -jar ua.jar -v");
    }

    #[test]
    fn test_to_command() {
        let mut env = HashMap::new();
        env.insert("WS_APIKEY".to_string(), "k".to_string());
        let invocation = AgentInvocation {
            program: "java".to_string(),
            args: vec!["-v".to_string()],
            env,
        };

        let command = invocation.to_command();
        assert_eq!(command.get_program(), "java");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(args, vec!["-v"]);
        let set: Vec<_> = command
            .get_envs()
            .filter_map(|(k, v)| v.map(|v| (k, v)))
            .collect();
        assert_eq!(set, vec![(OsStr::new("WS_APIKEY"), OsStr::new("k"))]);
    }

    #[test]
    fn test_to_command_removes_unlisted_variables() {
        env::set_var("UACFG_SCAN_UNLISTED", "x");
        let invocation = AgentInvocation {
            program: "java".to_string(),
            args: vec![],
            env: HashMap::new(),
        };

        let command = invocation.to_command();
        env::remove_var("UACFG_SCAN_UNLISTED");
        assert!(command
            .get_envs()
            .any(|(k, v)| k == "UACFG_SCAN_UNLISTED" && v.is_none()));
    }

    #[cfg(unix)]
    #[test]
    fn test_to_command_passes_non_unicode_variables_through() {
        use std::os::unix::ffi::OsStrExt;

        env::set_var("UACFG_SCAN_RAW", OsStr::from_bytes(b"caf\xe9"));
        let invocation = AgentInvocation {
            program: "java".to_string(),
            args: vec![],
            env: HashMap::new(),
        };

        let command = invocation.to_command();
        env::remove_var("UACFG_SCAN_RAW");
        // not removed, so the child inherits it
        assert!(!command.get_envs().any(|(k, _)| k == "UACFG_SCAN_RAW"));
    }

    #[test]
    fn test_output_version() {
        let output = AgentOutput {
            status: Some(0),
            stdout: "21.6.3\r\n".to_string(),
        };
        assert!(output.success());
        assert_eq!(output.version(), "21.6.3");
    }

    #[test]
    fn test_output_failure() {
        let output = AgentOutput {
            status: None,
            stdout: String::new(),
        };
        assert!(!output.success());
    }
}
