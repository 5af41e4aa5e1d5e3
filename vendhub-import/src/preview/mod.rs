//! Preview summaries for server-computed results
//!
//! Pure formatting over payloads the server already computed: no business
//! decisions are made here beyond threshold-to-style lookups and truncation.

mod action_plan;
mod mapping;
mod validation;

pub use action_plan::{summarize_plan, PlanSummary, SummaryCard, DETAIL_LIMIT};
pub use mapping::{mapping_preview, ConfidenceBand, MappingPreview, MappingRow};
pub use validation::{summarize_report, ReportBanner, ValidationSummary};
