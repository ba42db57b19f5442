//! Coverage, rule compliance and integration posture scores.

use std::collections::BTreeMap;

use gets_model::{FieldMapping, Questionnaire, RuleName, RuleResult};
use gets_standards::SchemaRegistry;

use crate::data::clamp_score;

const REQUIRED_COVERAGE_WEIGHT: f64 = 0.7;
const OPTIONAL_COVERAGE_WEIGHT: f64 = 0.3;

/// Posture when no questionnaire was supplied.
pub const NEUTRAL_POSTURE: u8 = 50;

/// Weighted mapped ratio of required and optional catalog fields.
///
/// Every mapped column counts, so two columns targeting the same required
/// field count twice; the result is capped at 100. A catalog without
/// required (or optional) fields treats that group as fully covered.
pub fn coverage_score(mapping: &FieldMapping, registry: &SchemaRegistry) -> u8 {
    let required_total = registry.required_fields().count();
    let optional_total = registry.optional_fields().count();
    let mut required_mapped = 0usize;
    let mut optional_mapped = 0usize;
    for (_, target) in mapping.mapped() {
        match registry.field(target) {
            Some(field) if field.required => required_mapped += 1,
            Some(_) => optional_mapped += 1,
            None => {}
        }
    }
    let score = ratio(required_mapped, required_total) * REQUIRED_COVERAGE_WEIGHT
        + ratio(optional_mapped, optional_total) * OPTIONAL_COVERAGE_WEIGHT;
    clamp_score(score.min(100.0))
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        100.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Weight of a rule in the compliance score.
pub fn rule_weight(rule: RuleName) -> f64 {
    match rule {
        RuleName::TotalsBalance => 0.20,
        RuleName::DateIso => 0.15,
        RuleName::CurrencyAllowed => 0.20,
        RuleName::LineMath => 0.10,
        RuleName::TrnPresent => 0.10,
    }
}

/// Weighted success rate over the rules present in `results`.
///
/// Absent rules drop out of both numerator and denominator; with no rules
/// the score is 100.
pub fn rules_score(results: &BTreeMap<RuleName, RuleResult>) -> u8 {
    let mut weighted = 0.0;
    let mut weight_sum = 0.0;
    for (rule, result) in results {
        let weight = rule_weight(*rule);
        weighted += result.success_rate() * weight;
        weight_sum += weight;
    }
    if weight_sum == 0.0 {
        return 100;
    }
    clamp_score(weighted / weight_sum)
}

/// Points per answer: `(true, false, unknown)`.
const WEBHOOK_POINTS: (f64, f64, f64) = (25.0, 0.0, 12.5);
const SANDBOX_POINTS: (f64, f64, f64) = (25.0, 10.0, 17.5);
const RETRY_POINTS: (f64, f64, f64) = (25.0, 5.0, 15.0);
const ERROR_HANDLING_POINTS: (f64, f64, f64) = (25.0, 5.0, 15.0);

/// Integration posture from the questionnaire, 50 when absent.
pub fn posture_score(questionnaire: Option<&Questionnaire>) -> u8 {
    let Some(answers) = questionnaire else {
        return NEUTRAL_POSTURE;
    };
    let total = points(answers.webhooks, WEBHOOK_POINTS)
        + points(answers.sandbox_env, SANDBOX_POINTS)
        + points(answers.retries, RETRY_POINTS)
        + points(answers.error_handling, ERROR_HANDLING_POINTS);
    clamp_score(total)
}

fn points(answer: Option<bool>, (yes, no, unknown): (f64, f64, f64)) -> f64 {
    match answer {
        Some(true) => yes,
        Some(false) => no,
        None => unknown,
    }
}
