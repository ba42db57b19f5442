use std::collections::BTreeSet;

use gets_model::{Issue, RuleName};

/// Advice for a report: one sentence for the score band, one per failing
/// rule, and a generic suggestion when no rule failed.
pub fn recommendations(score: u8, issues: &[Issue]) -> Vec<String> {
    let band = match score {
        0..=49 => "Urgent action required: Data quality is critically low",
        50..=69 => "Significant improvements needed before e-invoicing implementation",
        70..=89 => "Good foundation, minor improvements recommended",
        _ => "Excellent data quality, ready for e-invoicing implementation",
    };
    let mut advice = vec![band.to_string()];

    let failing: BTreeSet<RuleName> = issues.iter().map(|issue| issue.rule).collect();
    for rule in [
        RuleName::DateIso,
        RuleName::CurrencyAllowed,
        RuleName::TotalsBalance,
        RuleName::LineMath,
        RuleName::TrnPresent,
    ] {
        if failing.contains(&rule) {
            advice.push(rule_advice(rule).to_string());
        }
    }

    if advice.len() == 1 {
        advice.push(
            "Consider implementing automated validation checks in your ERP system".to_string(),
        );
    }
    advice
}

fn rule_advice(rule: RuleName) -> &'static str {
    match rule {
        RuleName::DateIso => "Standardize date formats to YYYY-MM-DD across all records",
        RuleName::CurrencyAllowed => {
            "Update currency codes to valid ISO standards (AED, SAR, MYR, USD)"
        }
        RuleName::TotalsBalance => "Review and correct VAT calculation formulas",
        RuleName::LineMath => "Verify line item calculations (qty × unit_price = line_total)",
        RuleName::TrnPresent => "Ensure TRN numbers are provided for both buyer and seller",
    }
}
