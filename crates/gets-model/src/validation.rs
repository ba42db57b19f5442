//! Rule outcomes and validation results.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::value::CellValue;

/// The fixed battery of business rules run against every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleName {
    /// `total_incl_vat == total_excl_vat + vat_amount` (±0.01).
    TotalsBalance,
    /// `line_total == qty * unit_price` (±0.01) for every line item.
    LineMath,
    /// Issue date is a real calendar date in `YYYY-MM-DD` form.
    DateIso,
    /// Currency is one of the accepted codes.
    CurrencyAllowed,
    /// Mapped seller/buyer TRN values are not blank.
    TrnPresent,
}

impl RuleName {
    /// All rules, in execution order.
    pub const ALL: [RuleName; 5] = [
        RuleName::TotalsBalance,
        RuleName::LineMath,
        RuleName::DateIso,
        RuleName::CurrencyAllowed,
        RuleName::TrnPresent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::TotalsBalance => "TOTALS_BALANCE",
            RuleName::LineMath => "LINE_MATH",
            RuleName::DateIso => "DATE_ISO",
            RuleName::CurrencyAllowed => "CURRENCY_ALLOWED",
            RuleName::TrnPresent => "TRN_PRESENT",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RuleName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|rule| rule.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown rule: {s}"))
    }
}

/// A single rule failure tied to a row and field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    /// 1-based row index within the batch.
    pub row: usize,
    /// Standard field path the failure concerns (empty for rule faults).
    pub field: String,
    /// Source column the value was read from (empty for rule faults).
    pub source_field: String,
    pub rule: RuleName,
    /// Human-readable message.
    pub error: String,
    pub value: CellValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<CellValue>,
    /// 1-based line-item index for line-level failures.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

/// Row-level counters and issues for one rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleResult {
    /// Rows for which the rule passed (or was skipped).
    pub passed: usize,
    /// Rows for which the rule failed, however many issues it raised.
    pub failed: usize,
    pub issues: Vec<Issue>,
}

impl RuleResult {
    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Percentage of rows that passed; 100 when the rule saw no rows.
    pub fn success_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            100.0
        } else {
            self.passed as f64 / total as f64 * 100.0
        }
    }
}

/// Outcome of a validation run over a batch of rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub rows_checked: usize,
    /// Rows for which every rule passed.
    pub passed: usize,
    pub failed: usize,
    pub issues: Vec<Issue>,
    pub rule_results: BTreeMap<RuleName, RuleResult>,
    /// Percentage of passing rows, 0 for an empty batch.
    pub score: u8,
}

impl ValidationResult {
    pub fn rule(&self, rule: RuleName) -> Option<&RuleResult> {
        self.rule_results.get(&rule)
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Issues grouped by row index.
    pub fn issues_by_row(&self) -> BTreeMap<usize, Vec<&Issue>> {
        let mut grouped: BTreeMap<usize, Vec<&Issue>> = BTreeMap::new();
        for issue in &self.issues {
            grouped.entry(issue.row).or_default().push(issue);
        }
        grouped
    }
}
