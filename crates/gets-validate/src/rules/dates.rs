//! Issue date in `YYYY-MM-DD` form that names a real calendar day.

use std::sync::LazyLock;

use chrono::NaiveDate;
use gets_model::RuleName;
use regex::Regex;

use super::RuleOutcome;
use crate::context::RowContext;
use crate::fault::RuleFault;

pub const ISSUE_DATE: &str = "invoice.issue_date";

const DATE_FORMAT: &str = "%Y-%m-%d";

static ISO_DATE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid ISO date regex"));

pub fn check(ctx: &RowContext<'_>) -> Result<RuleOutcome, RuleFault> {
    let Some(date) = ctx.resolve(ISSUE_DATE) else {
        return Ok(RuleOutcome::Skipped);
    };
    let value = date.scalar()?;
    let Some(text) = value.scalar_text().filter(|text| !text.is_empty()) else {
        return Ok(RuleOutcome::Skipped);
    };

    if is_iso_date(&text) {
        return Ok(RuleOutcome::Passed);
    }
    let issue = ctx.issue(
        RuleName::DateIso,
        &date,
        format!("Issue date '{text}' is not a valid date in YYYY-MM-DD format"),
    );
    Ok(RuleOutcome::Failed(vec![issue]))
}

/// True if `text` matches `YYYY-MM-DD` and survives a parse/format round trip.
pub fn is_iso_date(text: &str) -> bool {
    if !ISO_DATE_REGEX.is_match(text) {
        return false;
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map(|date| date.format(DATE_FORMAT).to_string() == text)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_calendar_dates() {
        assert!(is_iso_date("2024-01-15"));
        assert!(is_iso_date("2024-02-29"));
    }

    #[test]
    fn rejects_invalid_dates() {
        assert!(!is_iso_date("2024-13-01"));
        assert!(!is_iso_date("2024-02-30"));
        assert!(!is_iso_date("2023-02-29"));
        assert!(!is_iso_date("01/15/2024"));
        assert!(!is_iso_date("2024-1-15"));
        assert!(!is_iso_date(" 2024-01-15"));
        assert!(!is_iso_date("2024-01-15T00:00:00"));
    }
}
