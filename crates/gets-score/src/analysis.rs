use gets_map::analyze_coverage;
use gets_model::{
    CategoryScores, CoverageReport, FieldMapping, Questionnaire, Readiness, Row, ValidationResult,
};
use gets_standards::SchemaRegistry;
use gets_validate::run_validation;
use serde::Serialize;
use tracing::{debug, info_span};

use crate::category::{coverage_score, posture_score, rules_score};
use crate::data::data_score;
use crate::overall::overall_score;
use crate::recommend::recommendations;

/// Everything a report needs for one upload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analysis {
    pub category_scores: CategoryScores,
    pub overall_score: u8,
    pub readiness_level: Readiness,
    pub coverage_analysis: CoverageReport,
    pub validation_results: ValidationResult,
    pub recommendations: Vec<String>,
}

/// Validates, scores and checks coverage for one batch.
///
/// `mapping` is expected to have been validated against `registry`.
pub fn analyze(
    rows: &[Row],
    mapping: &FieldMapping,
    questionnaire: Option<&Questionnaire>,
    registry: &SchemaRegistry,
) -> Analysis {
    let span = info_span!("analysis", rows = rows.len(), columns = mapping.len());
    let _guard = span.enter();

    let validation = run_validation(rows, mapping);
    let category_scores = CategoryScores {
        data: Some(data_score(rows)),
        coverage: Some(coverage_score(mapping, registry)),
        rules: Some(rules_score(&validation.rule_results)),
        posture: Some(posture_score(questionnaire)),
    };
    let overall = overall_score(&category_scores);
    let readiness = Readiness::from_score(overall);
    let coverage = analyze_coverage(mapping, registry);
    let advice = recommendations(validation.score, &validation.issues);
    debug!(
        ?category_scores,
        overall,
        readiness = %readiness,
        "analysis scored"
    );

    Analysis {
        category_scores,
        overall_score: overall,
        readiness_level: readiness,
        coverage_analysis: coverage,
        validation_results: validation,
        recommendations: advice,
    }
}
