//! Seller and buyer TRN values must not be blank when supplied.
//!
//! Unmapped TRN fields and null values are not flagged.

use gets_model::RuleName;

use super::RuleOutcome;
use crate::context::RowContext;
use crate::fault::RuleFault;

pub const SELLER_TRN: &str = "seller.trn";
pub const BUYER_TRN: &str = "buyer.trn";

pub fn check(ctx: &RowContext<'_>) -> Result<RuleOutcome, RuleFault> {
    let mut issues = Vec::new();
    let mut seen = false;

    for (field, party) in [(SELLER_TRN, "Seller"), (BUYER_TRN, "Buyer")] {
        let Some(trn) = ctx.resolve(field) else {
            continue;
        };
        let Some(text) = trn.scalar()?.scalar_text() else {
            continue;
        };
        seen = true;
        if text.trim().is_empty() {
            issues.push(ctx.issue(
                RuleName::TrnPresent,
                &trn,
                format!("{party} TRN is empty"),
            ));
        }
    }

    if !seen {
        return Ok(RuleOutcome::Skipped);
    }
    Ok(RuleOutcome::from_issues(issues))
}
