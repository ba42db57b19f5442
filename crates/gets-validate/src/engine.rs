//! Batch execution of the rule battery.

use std::collections::BTreeMap;

use gets_model::{FieldMapping, MAX_BATCH_ROWS, Row, RuleName, RuleResult, ValidationResult};
use tracing::{debug, info, info_span, trace, warn};

use crate::context::RowContext;
use crate::rules::{self, RuleOutcome};

/// Runs every rule against every row of a batch.
///
/// The engine never aborts: a rule that faults on a row fails that row
/// with a synthetic issue and the remaining rules and rows still run.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a> {
    mapping: &'a FieldMapping,
}

impl<'a> RuleEngine<'a> {
    pub fn new(mapping: &'a FieldMapping) -> Self {
        Self { mapping }
    }

    pub fn run(&self, rows: &[Row]) -> ValidationResult {
        let rows = if rows.len() > MAX_BATCH_ROWS {
            warn!(
                rows = rows.len(),
                limit = MAX_BATCH_ROWS,
                "batch exceeds row limit; extra rows ignored"
            );
            &rows[..MAX_BATCH_ROWS]
        } else {
            rows
        };

        let span = info_span!("validation", rows = rows.len());
        let _guard = span.enter();

        let mut rule_results: BTreeMap<RuleName, RuleResult> = RuleName::ALL
            .into_iter()
            .map(|rule| (rule, RuleResult::default()))
            .collect();
        let mut issues = Vec::new();
        let mut passed = 0usize;

        for (idx, row) in rows.iter().enumerate() {
            let ctx = RowContext::new(idx + 1, row, self.mapping);
            let mut row_failed = false;

            for rule in RuleName::ALL {
                let (failed, rule_issues) = match rules::check(rule, &ctx) {
                    Ok(RuleOutcome::Failed(found)) => (true, found),
                    Ok(outcome) => {
                        trace!(row = ctx.row_number, %rule, ?outcome, "rule passed");
                        (false, Vec::new())
                    }
                    Err(fault) => {
                        debug!(row = ctx.row_number, %rule, %fault, "rule faulted");
                        (true, vec![ctx.fault_issue(rule, &fault)])
                    }
                };
                let entry = rule_results.entry(rule).or_default();
                if failed {
                    row_failed = true;
                    entry.failed += 1;
                    issues.extend(rule_issues.iter().cloned());
                    entry.issues.extend(rule_issues);
                } else {
                    entry.passed += 1;
                }
            }

            if row_failed {
                debug!(row = ctx.row_number, "row failed validation");
            } else {
                passed += 1;
            }
        }

        let rows_checked = rows.len();
        let score = percentage(passed, rows_checked);
        info!(
            rows = rows_checked,
            passed,
            failed = rows_checked - passed,
            issues = issues.len(),
            score,
            "validation complete"
        );
        ValidationResult {
            rows_checked,
            passed,
            failed: rows_checked - passed,
            issues,
            rule_results,
            score,
        }
    }
}

/// Runs the rule battery over `rows` using `mapping`.
pub fn run_validation(rows: &[Row], mapping: &FieldMapping) -> ValidationResult {
    RuleEngine::new(mapping).run(rows)
}

fn percentage(part: usize, whole: usize) -> u8 {
    if whole == 0 {
        return 0;
    }
    (part as f64 / whole as f64 * 100.0).round() as u8
}
