//! Status → wizard step projection
//!
//! The wizard renders one of six steps derived purely from the last-observed
//! session status. The projection is a total function over the closed status
//! enum (an exhaustive match, never a partial switch with a silent default),
//! so a new server-side status is a compile-time-visible change here.

use crate::models::{ImportSession, ImportStatus};

/// UI step of the import wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// No active session: waiting for a file
    Upload,
    /// Server is parsing/classifying, nothing to review yet
    Processing,
    /// Column mapping review
    Mapping,
    /// Validation report review
    Validation,
    /// Plan ready, operator must approve or reject
    Approval,
    /// Approved plan being applied
    Executing,
    /// Terminal screen (success or failure)
    Complete,
}

impl WizardStep {
    /// Map a session status to its wizard step.
    ///
    /// `Unknown` maps to `Processing`: the least-committal step for a status
    /// this client cannot interpret. The watcher logs every `Unknown`
    /// observation, so the mismatch is visible rather than silently spun on.
    pub fn for_status(status: ImportStatus) -> Self {
        match status {
            ImportStatus::Pending
            | ImportStatus::Parsing
            | ImportStatus::Parsed
            | ImportStatus::Classifying => WizardStep::Processing,
            ImportStatus::Classified => WizardStep::Mapping,
            ImportStatus::Validating | ImportStatus::Validated | ImportStatus::Suggesting => {
                WizardStep::Validation
            }
            ImportStatus::AwaitingApproval => WizardStep::Approval,
            ImportStatus::Approved | ImportStatus::Executing | ImportStatus::Reconciling => {
                WizardStep::Executing
            }
            ImportStatus::Completed
            | ImportStatus::Failed
            | ImportStatus::Rejected
            | ImportStatus::Cancelled => WizardStep::Complete,
            ImportStatus::Unknown => WizardStep::Processing,
        }
    }

    /// Current step for an optional active session
    pub fn current(session: Option<&ImportSession>) -> Self {
        match session {
            None => WizardStep::Upload,
            Some(session) => Self::for_status(session.status),
        }
    }

    /// Step name as shown in logs and the CLI
    pub fn as_str(self) -> &'static str {
        match self {
            WizardStep::Upload => "upload",
            WizardStep::Processing => "processing",
            WizardStep::Mapping => "mapping",
            WizardStep::Validation => "validation",
            WizardStep::Approval => "approval",
            WizardStep::Executing => "executing",
            WizardStep::Complete => "complete",
        }
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
