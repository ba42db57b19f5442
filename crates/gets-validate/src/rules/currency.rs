//! Currency code restricted to the accepted set.

use gets_model::RuleName;

use super::RuleOutcome;
use crate::context::RowContext;
use crate::fault::RuleFault;

pub const CURRENCY: &str = "invoice.currency";

/// Accepted codes, compared case-sensitively.
pub const ALLOWED_CURRENCIES: [&str; 4] = ["AED", "SAR", "MYR", "USD"];

pub fn check(ctx: &RowContext<'_>) -> Result<RuleOutcome, RuleFault> {
    let Some(currency) = ctx.resolve(CURRENCY) else {
        return Ok(RuleOutcome::Skipped);
    };
    let value = currency.scalar()?;
    let Some(code) = value.scalar_text().filter(|code| !code.is_empty()) else {
        return Ok(RuleOutcome::Skipped);
    };

    if ALLOWED_CURRENCIES.contains(&code.as_str()) {
        return Ok(RuleOutcome::Passed);
    }
    let issue = ctx.issue(
        RuleName::CurrencyAllowed,
        &currency,
        format!(
            "Currency '{code}' is not allowed; expected one of {}",
            ALLOWED_CURRENCIES.join(", ")
        ),
    );
    Ok(RuleOutcome::Failed(vec![issue]))
}
