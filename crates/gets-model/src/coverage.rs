//! Coverage report types (matched / close / missing standard fields).

use serde::{Deserialize, Serialize};

use crate::field::FieldType;

/// A source column mapped to a known standard field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedField {
    pub source: String,
    pub target: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// A standard field that no source column maps to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissingField {
    pub field: String,
    pub required: bool,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub description: String,
}

/// A candidate standard field for an unmapped source column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseCandidate {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub required: bool,
    /// Cumulative similarity score (0–100).
    pub score: u8,
}

/// Up to three candidates for one unmapped source column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseMatch {
    pub source: String,
    pub suggestions: Vec<CloseCandidate>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageSummary {
    pub total_standard_fields: usize,
    pub mapped_fields: usize,
    pub missing_fields: usize,
    pub close_matches: usize,
    pub coverage_percentage: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageReport {
    pub matched: Vec<MatchedField>,
    pub close: Vec<CloseMatch>,
    pub missing: Vec<MissingField>,
    pub summary: CoverageSummary,
}

impl CoverageReport {
    /// Missing fields that the schema marks as required.
    pub fn missing_required(&self) -> impl Iterator<Item = &MissingField> {
        self.missing.iter().filter(|field| field.required)
    }
}
