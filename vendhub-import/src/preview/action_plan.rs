//! Action plan preview

use crate::models::{ActionKind, ActionPlan, PlannedAction};
use vendhub_common::format::format_duration;

/// Detailed actions shown before truncation
pub const DETAIL_LIMIT: usize = 20;

/// One per-category summary card. Only non-zero categories produce a card.
#[derive(Debug, Clone)]
pub struct SummaryCard {
    pub kind: ActionKind,
    pub count: u64,
    pub label: &'static str,
}

fn label_for(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Insert => "Создать",
        ActionKind::Update => "Обновить",
        ActionKind::Merge => "Объединить",
        ActionKind::Skip => "Пропустить",
        ActionKind::Delete => "Удалить",
    }
}

/// Rendered action plan summary
#[derive(Debug, Clone)]
pub struct PlanSummary {
    pub total: u64,
    pub cards: Vec<SummaryCard>,
    /// Formatted estimated duration ("45 сек", "2 мин", "2 ч")
    pub estimated_duration: String,
    pub risks: Vec<String>,
    /// First [`DETAIL_LIMIT`] detailed actions
    pub visible_actions: Vec<PlannedAction>,
    /// Count of actions beyond the visible list
    pub hidden_actions: usize,
}

impl PlanSummary {
    /// "… и ещё N" suffix line, when the detail list was truncated
    pub fn overflow_line(&self) -> Option<String> {
        if self.hidden_actions > 0 {
            Some(format!("… и ещё {}", self.hidden_actions))
        } else {
            None
        }
    }
}

/// Build the summary from a server action plan
pub fn summarize_plan(plan: &ActionPlan) -> PlanSummary {
    let categories = [
        (ActionKind::Insert, plan.insert_count),
        (ActionKind::Update, plan.update_count),
        (ActionKind::Merge, plan.merge_count),
        (ActionKind::Skip, plan.skip_count),
        (ActionKind::Delete, plan.delete_count),
    ];

    let cards = categories
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(kind, count)| SummaryCard {
            kind,
            count,
            label: label_for(kind),
        })
        .collect();

    let visible_actions: Vec<PlannedAction> =
        plan.actions.iter().take(DETAIL_LIMIT).cloned().collect();
    let hidden_actions = plan.actions.len().saturating_sub(DETAIL_LIMIT);

    PlanSummary {
        total: plan.total_actions(),
        cards,
        estimated_duration: format_duration(plan.estimated_duration_seconds),
        risks: plan.risks.clone(),
        visible_actions,
        hidden_actions,
    }
}
