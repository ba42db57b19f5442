//! Invoice totals: `total_incl_vat == total_excl_vat + vat_amount`.

use gets_model::{CellValue, RuleName};

use super::{RuleOutcome, exceeds_tolerance, round_cents};
use crate::context::RowContext;
use crate::fault::RuleFault;

pub const TOTAL_EXCL_VAT: &str = "invoice.total_excl_vat";
pub const VAT_AMOUNT: &str = "invoice.vat_amount";
pub const TOTAL_INCL_VAT: &str = "invoice.total_incl_vat";

pub fn check(ctx: &RowContext<'_>) -> Result<RuleOutcome, RuleFault> {
    let (Some(excl), Some(vat), Some(incl)) = (
        ctx.resolve(TOTAL_EXCL_VAT),
        ctx.resolve(VAT_AMOUNT),
        ctx.resolve(TOTAL_INCL_VAT),
    ) else {
        return Ok(RuleOutcome::Skipped);
    };

    let (Some(excl_amount), Some(vat_amount), Some(incl_amount)) = (
        excl.scalar()?.as_number(),
        vat.scalar()?.as_number(),
        incl.scalar()?.as_number(),
    ) else {
        return Ok(RuleOutcome::Skipped);
    };

    let expected = excl_amount + vat_amount;
    if !exceeds_tolerance(incl_amount, expected) {
        return Ok(RuleOutcome::Passed);
    }

    let expected = round_cents(expected);
    let mut issue = ctx.issue(
        RuleName::TotalsBalance,
        &incl,
        format!(
            "Total including VAT ({incl_amount}) does not equal total excluding VAT \
             ({excl_amount}) plus VAT amount ({vat_amount}); expected {expected}"
        ),
    );
    issue.expected = Some(CellValue::Number(expected));
    Ok(RuleOutcome::Failed(vec![issue]))
}
