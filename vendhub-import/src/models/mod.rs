//! Wire types for the import service API
//!
//! All payloads are server-computed; the client deserializes them and never
//! writes session fields directly. Wire field names are camelCase, status and
//! severity values are UPPERCASE.

mod action_plan;
mod classification;
mod session;
mod validation;

pub use action_plan::{ActionKind, ActionPlan, ExecutionResult, PlannedAction};
pub use classification::{ClassificationResult, ColumnMapping};
pub use session::{FileMetadata, ImportSession, ImportStatus};
pub use validation::{Severity, ValidationIssue, ValidationReport};
