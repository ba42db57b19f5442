//! Matched / close / missing classification of catalog fields.

use gets_model::{
    CloseCandidate, CloseMatch, CoverageReport, CoverageSummary, FieldMapping, MatchedField,
    MissingField,
};
use gets_standards::{SchemaRegistry, field_description};
use tracing::debug;

use crate::normalize::{compact_path, compact_source, mutual_contains, prefix};

const SUBSTRING_SCORE: u8 = 50;
const PREFIX4_SCORE: u8 = 30;
const PREFIX3_SCORE: u8 = 20;
const MAX_CLOSE_CANDIDATES: usize = 3;

/// Builds the coverage report for a validated mapping.
///
/// Targets the registry does not know are left out of `matched`.
pub fn analyze_coverage(mapping: &FieldMapping, registry: &SchemaRegistry) -> CoverageReport {
    let matched: Vec<MatchedField> = mapping
        .mapped()
        .filter_map(|(source, target)| {
            registry.field(target).map(|field| MatchedField {
                source: source.to_string(),
                target: target.to_string(),
                required: field.required,
                field_type: field.field_type,
            })
        })
        .collect();

    let missing: Vec<MissingField> = registry
        .fields()
        .iter()
        .filter(|field| !mapping.targets(&field.path))
        .map(|field| MissingField {
            field: field.path.clone(),
            required: field.required,
            field_type: field.field_type,
            description: field_description(&field.path).to_string(),
        })
        .collect();

    let close: Vec<CloseMatch> = mapping
        .unmapped_sources()
        .filter_map(|source| {
            let suggestions = find_close_matches(source, registry);
            (!suggestions.is_empty()).then(|| CloseMatch {
                source: source.to_string(),
                suggestions,
            })
        })
        .collect();

    let total = registry.len();
    let coverage_percentage = if total == 0 {
        0
    } else {
        (matched.len() as f64 / total as f64 * 100.0).round() as u32
    };
    let summary = CoverageSummary {
        total_standard_fields: total,
        mapped_fields: matched.len(),
        missing_fields: missing.len(),
        close_matches: close.len(),
        coverage_percentage,
    };
    debug!(
        matched = summary.mapped_fields,
        missing = summary.missing_fields,
        close = summary.close_matches,
        percentage = summary.coverage_percentage,
        "coverage analyzed"
    );
    CoverageReport {
        matched,
        close,
        missing,
        summary,
    }
}

/// Ranks catalog fields by name similarity to one source column.
///
/// Returns at most three positive-scoring candidates, best first; ties keep
/// catalog order. Fields already targeted by other columns are still
/// considered.
pub fn find_close_matches(source: &str, registry: &SchemaRegistry) -> Vec<CloseCandidate> {
    let compact = compact_source(source);
    let mut scored: Vec<CloseCandidate> = registry
        .fields()
        .iter()
        .filter_map(|field| {
            let score = similarity(&compact, &compact_path(&field.path));
            (score > 0).then(|| CloseCandidate {
                field: field.path.clone(),
                field_type: field.field_type,
                required: field.required,
                score,
            })
        })
        .collect();
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_CLOSE_CANDIDATES);
    scored
}

fn similarity(source: &str, target: &str) -> u8 {
    let mut score = 0;
    if mutual_contains(source, target) {
        score += SUBSTRING_SCORE;
    }
    if prefix(source, 4) == prefix(target, 4) {
        score += PREFIX4_SCORE;
    }
    if prefix(source, 3) == prefix(target, 3) {
        score += PREFIX3_SCORE;
    }
    score
}
