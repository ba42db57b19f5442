//! Line items: `line_total == qty * unit_price`.

use gets_model::{CellValue, Issue, RuleName};

use super::{RuleOutcome, exceeds_tolerance, round_cents};
use crate::context::RowContext;
use crate::fault::RuleFault;

pub const QTY_ALIASES: &[&str] = &["qty", "quantity"];
pub const UNIT_PRICE_ALIASES: &[&str] = &["unit_price", "price"];
pub const LINE_TOTAL_ALIASES: &[&str] = &["line_total", "total"];

const LINE_TOTAL_FIELD: &str = "lines[].line_total";

/// Checks every line item found in any array-valued column.
///
/// Items without all three numeric values are ignored. Line numbers are
/// 1-based within their array.
pub fn check(ctx: &RowContext<'_>) -> Result<RuleOutcome, RuleFault> {
    let mut issues: Vec<Issue> = Vec::new();
    let mut checked = 0usize;

    for (column, lines) in ctx.row.line_arrays() {
        for (idx, line) in lines.iter().enumerate() {
            let qty = line.get_any(QTY_ALIASES).and_then(CellValue::as_number);
            let price = line.get_any(UNIT_PRICE_ALIASES).and_then(CellValue::as_number);
            let total_cell = line.get_any(LINE_TOTAL_ALIASES);
            let total = total_cell.and_then(CellValue::as_number);
            let (Some(qty), Some(price), Some(total), Some(total_cell)) =
                (qty, price, total, total_cell)
            else {
                continue;
            };
            checked += 1;

            let expected = qty * price;
            if !exceeds_tolerance(total, expected) {
                continue;
            }
            let expected = round_cents(expected);
            issues.push(Issue {
                row: ctx.row_number,
                field: LINE_TOTAL_FIELD.to_string(),
                source_field: column.to_string(),
                rule: RuleName::LineMath,
                error: format!(
                    "Line {} total ({total}) does not equal quantity ({qty}) times unit price \
                     ({price}); expected {expected}",
                    idx + 1
                ),
                value: total_cell.clone(),
                expected: Some(CellValue::Number(expected)),
                line: Some(idx + 1),
            });
        }
    }

    if checked == 0 {
        return Ok(RuleOutcome::Skipped);
    }
    Ok(RuleOutcome::from_issues(issues))
}
