//! Validation report: server-computed row-level issues

use serde::{Deserialize, Serialize};

/// Issue severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// One row-level issue found during server-side validation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationIssue {
    /// 1-based row number in the uploaded file, `None` for file-level issues
    #[serde(default)]
    pub row: Option<u64>,
    #[serde(default)]
    pub column: Option<String>,
    pub severity: Severity,
    pub message: String,
}

/// Server-computed validation report
///
/// Row-level errors are non-fatal to the session: `can_proceed` decides
/// whether the import may still be approved despite them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub error_count: u64,
    pub warning_count: u64,
    pub info_count: u64,
    #[serde(default)]
    pub issues: Vec<ValidationIssue>,
    pub is_valid: bool,
    pub can_proceed: bool,
}
