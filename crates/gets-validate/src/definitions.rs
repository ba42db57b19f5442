//! Static descriptions of the rule battery.

use gets_model::RuleName;
use serde::Serialize;

/// Human-facing description of one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleDefinition {
    pub rule: RuleName,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

const DEFINITIONS: [RuleDefinition; 5] = [
    RuleDefinition {
        rule: RuleName::TotalsBalance,
        name: "VAT Calculation Validation",
        description: "Validates VAT calculations: total_incl_vat = total_excl_vat + vat_amount",
        category: "Business Logic",
    },
    RuleDefinition {
        rule: RuleName::LineMath,
        name: "Line Item Math Validation",
        description: "Validates line totals: line_total = qty * unit_price",
        category: "Business Logic",
    },
    RuleDefinition {
        rule: RuleName::DateIso,
        name: "Date Format Validation",
        description: "Validates date fields are in YYYY-MM-DD format",
        category: "Data Format",
    },
    RuleDefinition {
        rule: RuleName::CurrencyAllowed,
        name: "Currency Validation",
        description: "Ensures currency codes are one of AED, SAR, MYR, USD",
        category: "Data Format",
    },
    RuleDefinition {
        rule: RuleName::TrnPresent,
        name: "TRN Presence Validation",
        description: "Ensures supplied buyer and seller TRN numbers are not empty",
        category: "Data Completeness",
    },
];

/// All rule definitions, in execution order.
pub fn rule_definitions() -> &'static [RuleDefinition] {
    &DEFINITIONS
}

pub fn rule_definition(rule: RuleName) -> &'static RuleDefinition {
    match rule {
        RuleName::TotalsBalance => &DEFINITIONS[0],
        RuleName::LineMath => &DEFINITIONS[1],
        RuleName::DateIso => &DEFINITIONS[2],
        RuleName::CurrencyAllowed => &DEFINITIONS[3],
        RuleName::TrnPresent => &DEFINITIONS[4],
    }
}
