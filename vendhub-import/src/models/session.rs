//! Import session projection and status enumeration
//!
//! The import session progresses through the server-side pipeline:
//! PENDING → PARSING → PARSED → CLASSIFYING → CLASSIFIED → VALIDATING →
//! VALIDATED → SUGGESTING → AWAITING_APPROVAL → APPROVED → EXECUTING →
//! RECONCILING → COMPLETED, with side-exits to FAILED, REJECTED and CANCELLED
//! reachable from intermediate states. The client only observes this machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{ActionPlan, ClassificationResult, ExecutionResult, ValidationReport};

/// Server-reported import session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportStatus {
    /// Upload accepted, processing not started
    Pending,
    /// File is being parsed
    Parsing,
    /// Rows extracted from the file
    Parsed,
    /// Domain and column inference running
    Classifying,
    /// Classification result available, awaiting mapping review
    Classified,
    /// Row-level validation running
    Validating,
    /// Validation report available
    Validated,
    /// Action plan being computed
    Suggesting,
    /// Plan ready, waiting for the operator to approve or reject
    AwaitingApproval,
    /// Operator approved, execution queued
    Approved,
    /// Planned actions being applied
    Executing,
    /// Post-execution reconciliation running
    Reconciling,
    /// Import finished successfully
    Completed,
    /// Import failed with a server-reported error
    Failed,
    /// Operator rejected the plan
    Rejected,
    /// Import cancelled
    Cancelled,
    /// Status value this client version does not recognize.
    ///
    /// Observed when the server introduces a new status. Callers must not
    /// treat this as terminal; the watcher logs every observation so the
    /// gap is visible instead of silently polled forever.
    #[serde(other)]
    Unknown,
}

impl ImportStatus {
    /// Session reached a terminal state (no further server transitions)
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            ImportStatus::Completed
                | ImportStatus::Failed
                | ImportStatus::Rejected
                | ImportStatus::Cancelled
        )
    }

    /// Polling stops on this status. AWAITING_APPROVAL is not terminal but
    /// the session will not move until the operator acts, so the poll loop
    /// has nothing left to observe.
    pub fn is_stopping(self) -> bool {
        self.is_terminal() || self == ImportStatus::AwaitingApproval
    }
}

/// File metadata echoed back by the server after upload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub filename: String,
    pub size_bytes: u64,
}

/// Client-observed import session
///
/// Stage payloads are append-only enrichment: `status` determines which are
/// populated, earlier-stage fields stay populated once computed, later-stage
/// fields are `None` until their stage is reached.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSession {
    pub session_id: Uuid,
    pub status: ImportStatus,
    #[serde(default)]
    pub file_metadata: Option<FileMetadata>,
    /// Populated from CLASSIFIED onward
    #[serde(default)]
    pub classification_result: Option<ClassificationResult>,
    /// Populated from VALIDATED onward
    #[serde(default)]
    pub validation_report: Option<ValidationReport>,
    /// Populated from AWAITING_APPROVAL onward
    #[serde(default)]
    pub action_plan: Option<ActionPlan>,
    /// Populated at COMPLETED
    #[serde(default)]
    pub execution_result: Option<ExecutionResult>,
    /// Free-text status or error explanation
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
