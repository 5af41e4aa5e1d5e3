//! Action plan and execution result

use serde::{Deserialize, Serialize};

/// Kind of planned import action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionKind {
    Insert,
    Update,
    Merge,
    Skip,
    Delete,
}

/// One detailed action from the plan
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedAction {
    #[serde(rename = "type")]
    pub kind: ActionKind,
    pub description: String,
    /// Source row the action derives from, when applicable
    #[serde(default)]
    pub row: Option<u64>,
}

/// Server-computed plan of what approval will apply
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPlan {
    pub insert_count: u64,
    pub update_count: u64,
    pub merge_count: u64,
    pub skip_count: u64,
    pub delete_count: u64,
    /// Server estimate for applying the plan, in seconds
    pub estimated_duration_seconds: u64,
    #[serde(default)]
    pub risks: Vec<String>,
    #[serde(default)]
    pub actions: Vec<PlannedAction>,
}

impl ActionPlan {
    /// Total number of planned actions across all categories
    pub fn total_actions(&self) -> u64 {
        self.insert_count + self.update_count + self.merge_count + self.skip_count
            + self.delete_count
    }
}

/// Outcome counts reported once execution finishes
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    pub success_count: u64,
    pub failure_count: u64,
}
