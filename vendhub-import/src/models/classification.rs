//! Classification result: server-inferred domain and column mapping

use serde::{Deserialize, Serialize};

/// Server-side inference of which business domain an uploaded file represents
/// and how its columns map to system fields
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Domain guess (e.g. "products", "transactions")
    pub domain: String,
    /// Overall classification confidence, 0.0–1.0
    pub confidence: f64,
    /// Per-column mapping suggestions
    #[serde(default)]
    pub mappings: Vec<ColumnMapping>,
}

/// One source column mapped (or not) to a system field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnMapping {
    /// Column header as it appears in the uploaded file
    pub source_column: String,
    /// Target system field, `None` when the column is unmapped
    #[serde(default)]
    pub target_field: Option<String>,
    /// Inferred data type (e.g. "string", "decimal", "date")
    #[serde(default)]
    pub data_type: Option<String>,
    /// Transform applied during import (e.g. "trim", "parse_date:DD.MM.YYYY")
    #[serde(default)]
    pub transform: Option<String>,
    /// Mapping confidence, 0.0–1.0
    pub confidence: f64,
}
