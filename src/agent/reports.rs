// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON reports written by the agent after a scan.

use crate::domain::{ConfigError, Result};
use std::fs;
use std::path::Path;

/// A report file the agent leaves in its output directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UaReport {
    /// The update request sent (or, offline, not sent) to the platform.
    UpdateRequest,
    /// Summary of policy rejections.
    PolicyRejectionSummary,
    /// Result of the policy check.
    CheckPolicies,
    /// Details of the scanned projects.
    ScanProjectDetails,
}

impl UaReport {
    /// File name of the report inside the output directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            UaReport::UpdateRequest => "update-request.txt",
            UaReport::PolicyRejectionSummary => "policyRejectionSummary.json",
            UaReport::CheckPolicies => "checkPolicies-json.txt",
            UaReport::ScanProjectDetails => "scanProjectDetails.json",
        }
    }

    /// Reads and parses the report from `output_dir`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the file is missing and
    /// `ConfigError::ParseError` if it is not valid JSON.
    pub fn read_from(&self, output_dir: &Path) -> Result<serde_json::Value> {
        let path = output_dir.join(self.file_name());
        let content = fs::read_to_string(&path).map_err(|e| ConfigError::not_found(&path, e))?;
        serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: format!("Invalid JSON in {}", path.display()),
            source: Some(Box::new(e)),
        })
    }
}
