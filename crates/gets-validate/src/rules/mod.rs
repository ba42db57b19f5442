//! The five business rules.
//!
//! Each module exposes `check`, which evaluates one row. Skipped rules
//! count as passed.

pub mod currency;
pub mod dates;
pub mod line_math;
pub mod totals;
pub mod trn;

use gets_model::{Issue, RuleName};

use crate::context::RowContext;
use crate::fault::RuleFault;

/// Result of evaluating one rule against one row.
#[derive(Debug, Clone, PartialEq)]
pub enum RuleOutcome {
    Passed,
    /// Inputs were unmapped, empty or non-numeric.
    Skipped,
    Failed(Vec<Issue>),
}

impl RuleOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, RuleOutcome::Failed(_))
    }

    pub(crate) fn from_issues(issues: Vec<Issue>) -> Self {
        if issues.is_empty() {
            RuleOutcome::Passed
        } else {
            RuleOutcome::Failed(issues)
        }
    }
}

/// Runs one rule against one row.
pub fn check(rule: RuleName, ctx: &RowContext<'_>) -> Result<RuleOutcome, RuleFault> {
    match rule {
        RuleName::TotalsBalance => totals::check(ctx),
        RuleName::LineMath => line_math::check(ctx),
        RuleName::DateIso => dates::check(ctx),
        RuleName::CurrencyAllowed => currency::check(ctx),
        RuleName::TrnPresent => trn::check(ctx),
    }
}

/// Differences strictly above the tolerance fail. The epsilon absorbs
/// binary rounding so that a difference of exactly 0.01 passes.
pub(crate) fn exceeds_tolerance(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() > crate::AMOUNT_TOLERANCE + 1e-9
}

/// Rounds to cents for reporting.
pub(crate) fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_boundary() {
        assert!(!exceeds_tolerance(105.0, 105.0));
        assert!(!exceeds_tolerance(105.01, 105.0));
        assert!(!exceeds_tolerance(104.99, 105.0));
        assert!(exceeds_tolerance(105.02, 105.0));
        assert!(exceeds_tolerance(106.0, 105.0));
    }

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
        assert_eq!(round_cents(105.0), 105.0);
    }
}
