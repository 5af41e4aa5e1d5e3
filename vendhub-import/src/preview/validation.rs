//! Validation report preview

use crate::models::{Severity, ValidationIssue, ValidationReport};

/// Pass/warn/fail banner derived from the two server booleans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportBanner {
    /// `isValid`: no blocking issues
    Pass,
    /// Issues present but `canProceed` still allows approval
    Warn,
    /// `!canProceed`: session cannot be approved
    Fail,
}

impl ReportBanner {
    pub fn for_report(is_valid: bool, can_proceed: bool) -> Self {
        if !can_proceed {
            ReportBanner::Fail
        } else if is_valid {
            ReportBanner::Pass
        } else {
            ReportBanner::Warn
        }
    }
}

/// Issues bucketed by severity, plus the banner
#[derive(Debug, Clone)]
pub struct ValidationSummary {
    pub banner: ReportBanner,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
    pub infos: Vec<ValidationIssue>,
}

impl ValidationSummary {
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn info_count(&self) -> usize {
        self.infos.len()
    }
}

/// Group the flat issue list into severity buckets
pub fn summarize_report(report: &ValidationReport) -> ValidationSummary {
    let mut summary = ValidationSummary {
        banner: ReportBanner::for_report(report.is_valid, report.can_proceed),
        errors: Vec::new(),
        warnings: Vec::new(),
        infos: Vec::new(),
    };

    for issue in &report.issues {
        match issue.severity {
            Severity::Error => summary.errors.push(issue.clone()),
            Severity::Warning => summary.warnings.push(issue.clone()),
            Severity::Info => summary.infos.push(issue.clone()),
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: Severity, message: &str) -> ValidationIssue {
        ValidationIssue {
            row: Some(1),
            column: None,
            severity,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_banner_logic() {
        assert_eq!(ReportBanner::for_report(true, true), ReportBanner::Pass);
        assert_eq!(ReportBanner::for_report(false, true), ReportBanner::Warn);
        assert_eq!(ReportBanner::for_report(false, false), ReportBanner::Fail);
        // canProceed is authoritative even if the server claims validity
        assert_eq!(ReportBanner::for_report(true, false), ReportBanner::Fail);
    }

    #[test]
    fn test_grouping() {
        let report = ValidationReport {
            error_count: 1,
            warning_count: 2,
            info_count: 1,
            issues: vec![
                issue(Severity::Warning, "подозрительная цена"),
                issue(Severity::Error, "не число"),
                issue(Severity::Info, "пустая ячейка"),
                issue(Severity::Warning, "дубликат строки"),
            ],
            is_valid: false,
            can_proceed: true,
        };

        let summary = summarize_report(&report);
        assert_eq!(summary.banner, ReportBanner::Warn);
        assert_eq!(summary.error_count(), 1);
        assert_eq!(summary.warning_count(), 2);
        assert_eq!(summary.info_count(), 1);
        assert_eq!(summary.errors[0].message, "не число");
    }
}
