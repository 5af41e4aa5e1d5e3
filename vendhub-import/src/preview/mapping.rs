//! Column mapping preview

use crate::models::{ClassificationResult, ColumnMapping};

/// Confidence band for a mapped column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    /// ≥ 0.9
    High,
    /// 0.7 – 0.9
    Medium,
    /// < 0.7
    Low,
}

impl ConfidenceBand {
    /// Band for a confidence score. Boundaries are inclusive on the upper
    /// band: 0.9 is High, 0.7 is Medium.
    pub fn for_confidence(confidence: f64) -> Self {
        if confidence >= 0.9 {
            ConfidenceBand::High
        } else if confidence >= 0.7 {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }

    /// Display color used by the wizard
    pub fn color(self) -> &'static str {
        match self {
            ConfidenceBand::High => "green",
            ConfidenceBand::Medium => "yellow",
            ConfidenceBand::Low => "red",
        }
    }
}

/// One rendered mapping row
#[derive(Debug, Clone)]
pub struct MappingRow {
    pub source_column: String,
    pub target_field: Option<String>,
    pub data_type: Option<String>,
    pub transform: Option<String>,
    pub confidence: f64,
    pub band: ConfidenceBand,
}

impl MappingRow {
    fn from_mapping(mapping: &ColumnMapping) -> Self {
        Self {
            source_column: mapping.source_column.clone(),
            target_field: mapping.target_field.clone(),
            data_type: mapping.data_type.clone(),
            transform: mapping.transform.clone(),
            confidence: mapping.confidence,
            band: ConfidenceBand::for_confidence(mapping.confidence),
        }
    }

    /// Single display line for terminal output
    pub fn render(&self) -> String {
        let target = self.target_field.as_deref().unwrap_or("—");
        let mut line = format!(
            "{} → {} [{:.0}%, {}]",
            self.source_column,
            target,
            self.confidence * 100.0,
            self.band.color()
        );
        if let Some(data_type) = &self.data_type {
            line.push_str(&format!(" тип: {}", data_type));
        }
        if let Some(transform) = &self.transform {
            line.push_str(&format!(" преобразование: {}", transform));
        }
        line
    }
}

/// Rendered mapping preview
#[derive(Debug, Clone)]
pub struct MappingPreview {
    pub domain: String,
    pub confidence: f64,
    pub rows: Vec<MappingRow>,
}

/// Build the preview from a server classification result
pub fn mapping_preview(result: &ClassificationResult) -> MappingPreview {
    MappingPreview {
        domain: result.domain.clone(),
        confidence: result.confidence,
        rows: result.mappings.iter().map(MappingRow::from_mapping).collect(),
    }
}
