use gets_model::{CellValue, FieldMapping, Record, RuleName, ValidationResult};
use gets_validate::run_validation;

fn mapping() -> FieldMapping {
    FieldMapping::new()
        .with("Invoice No", Some("invoice.id"))
        .with("Date", Some("invoice.issue_date"))
        .with("Currency", Some("invoice.currency"))
        .with("Net", Some("invoice.total_excl_vat"))
        .with("VAT", Some("invoice.vat_amount"))
        .with("Gross", Some("invoice.total_incl_vat"))
        .with("Seller TRN", Some("seller.trn"))
        .with("Buyer TRN", Some("buyer.trn"))
        .with("Notes", None)
}

fn good_row() -> Record {
    Record::new()
        .with("Invoice No", "INV-001")
        .with("Date", "2024-01-15")
        .with("Currency", "AED")
        .with("Net", 100.0)
        .with("VAT", 5.0)
        .with("Gross", 105.0)
        .with("Seller TRN", "100000000000003")
        .with("Buyer TRN", "100000000000004")
}

fn run(rows: &[Record]) -> ValidationResult {
    run_validation(rows, &mapping())
}

fn failures(result: &ValidationResult, rule: RuleName) -> usize {
    result.rule(rule).map(|r| r.failed).unwrap_or_default()
}

#[test]
fn clean_row_passes_every_rule() {
    let result = run(&[good_row()]);
    assert_eq!(result.rows_checked, 1);
    assert_eq!(result.passed, 1);
    assert_eq!(result.failed, 0);
    assert_eq!(result.score, 100);
    assert!(result.issues.is_empty());
    assert_eq!(result.rule_results.len(), 5);
}

#[test]
fn totals_balance_tolerance() {
    let exact = good_row();
    let within = good_row().with("Gross", "105.01");
    let over = good_row().with("Gross", 105.02);
    let off = good_row().with("Gross", 106.0);
    let result = run(&[exact, within, over, off]);

    let totals = result.rule(RuleName::TotalsBalance).unwrap();
    assert_eq!(totals.passed, 2);
    assert_eq!(totals.failed, 2);
    let issue = totals.issues.iter().find(|i| i.row == 4).unwrap();
    assert_eq!(issue.field, "invoice.total_incl_vat");
    assert_eq!(issue.source_field, "Gross");
    assert_eq!(issue.value, CellValue::Number(106.0));
    assert_eq!(issue.expected, Some(CellValue::Number(105.0)));
}

#[test]
fn totals_balance_skips_unparseable_amounts() {
    let row = good_row().with("Gross", "n/a");
    let result = run(&[row]);
    assert_eq!(failures(&result, RuleName::TotalsBalance), 0);
    assert_eq!(result.passed, 1);
}

#[test]
fn totals_balance_skips_when_unmapped() {
    let mapping = FieldMapping::new().with("Net", Some("invoice.total_excl_vat"));
    let row = Record::new().with("Net", 1.0).with("Gross", 999.0);
    let result = run_validation(&[row], &mapping);
    assert_eq!(result.passed, 1);
}

#[test]
fn currency_must_be_allowed() {
    let result = run(&[
        good_row(),
        good_row().with("Currency", "EUR"),
        good_row().with("Currency", "aed"),
        good_row().with("Currency", ""),
    ]);
    let currency = result.rule(RuleName::CurrencyAllowed).unwrap();
    assert_eq!(currency.passed, 2);
    assert_eq!(currency.failed, 2);
    let eur = &currency.issues[0];
    assert_eq!(eur.row, 2);
    for code in ["AED", "SAR", "MYR", "USD"] {
        assert!(eur.error.contains(code), "{}", eur.error);
    }
}

#[test]
fn dates_must_be_iso_calendar_dates() {
    let result = run(&[
        good_row(),
        good_row().with("Date", "2024-13-01"),
        good_row().with("Date", "01/15/2024"),
        good_row().with("Date", "2024-02-30"),
        good_row().with("Date", CellValue::Null),
    ]);
    let dates = result.rule(RuleName::DateIso).unwrap();
    assert_eq!(dates.passed, 2);
    assert_eq!(dates.failed, 3);
    let rows: Vec<usize> = dates.issues.iter().map(|i| i.row).collect();
    assert_eq!(rows, vec![2, 3, 4]);
}

#[test]
fn trn_flags_only_blank_supplied_values() {
    let blank_seller = good_row().with("Seller TRN", "   ");
    let both_blank = good_row().with("Seller TRN", "").with("Buyer TRN", "");
    let null_buyer = good_row().with("Buyer TRN", CellValue::Null);
    let result = run(&[blank_seller, both_blank, null_buyer]);

    let trn = result.rule(RuleName::TrnPresent).unwrap();
    assert_eq!(trn.failed, 2);
    assert_eq!(trn.passed, 1);
    assert_eq!(trn.issues.len(), 3);
    assert_eq!(trn.issues[0].field, "seller.trn");
    assert_eq!(trn.issues[1].field, "seller.trn");
    assert_eq!(trn.issues[2].field, "buyer.trn");
}

#[test]
fn unmapped_trn_is_not_flagged() {
    let mapping = FieldMapping::new().with("Seller TRN", None);
    let row = Record::new().with("Seller TRN", "");
    let result = run_validation(&[row], &mapping);
    assert_eq!(result.passed, 1);
    assert!(result.issues.is_empty());
}

#[test]
fn line_math_counts_rows_not_issues() {
    let lines = vec![
        Record::new().with("qty", 2.0).with("unit_price", 10.0).with("line_total", 20.0),
        Record::new().with("quantity", "3").with("price", "5").with("total", "16"),
        Record::new().with("qty", 1.0).with("unit_price", 1.0).with("line_total", 5.0),
        Record::new().with("qty", 1.0).with("line_total", 5.0),
    ];
    let row = good_row().with("items", lines);
    let result = run(&[row, good_row()]);

    let line_math = result.rule(RuleName::LineMath).unwrap();
    assert_eq!(line_math.failed, 1);
    assert_eq!(line_math.passed, 1);
    assert_eq!(line_math.issues.len(), 2);
    assert_eq!(line_math.issues[0].line, Some(2));
    assert_eq!(line_math.issues[0].source_field, "items");
    assert_eq!(line_math.issues[0].expected, Some(CellValue::Number(15.0)));
    assert_eq!(line_math.issues[1].line, Some(3));
    assert_eq!(result.failed, 1);
}

#[test]
fn first_present_alias_wins() {
    // `qty` is present but not numeric, so `quantity` is never consulted.
    let lines = vec![
        Record::new()
            .with("qty", "many")
            .with("quantity", 2.0)
            .with("unit_price", 1.0)
            .with("line_total", 99.0),
    ];
    let result = run(&[good_row().with("items", lines)]);
    assert_eq!(failures(&result, RuleName::LineMath), 0);
}

#[test]
fn fault_is_isolated_to_rule_and_row() {
    let nested = vec![Record::new().with("code", "AED")];
    let faulty = good_row().with("Currency", nested);
    let result = run(&[faulty, good_row()]);

    assert_eq!(result.rows_checked, 2);
    assert_eq!(result.passed, 1);
    assert_eq!(result.failed, 1);
    let currency = result.rule(RuleName::CurrencyAllowed).unwrap();
    assert_eq!(currency.failed, 1);
    assert_eq!(currency.passed, 1);
    assert_eq!(currency.issues.len(), 1);
    assert!(currency.issues[0].error.starts_with("Rule validation error: "));
    // The other rules still evaluated the faulty row.
    assert_eq!(result.rule(RuleName::TotalsBalance).unwrap().passed, 2);
    assert_eq!(result.rule(RuleName::DateIso).unwrap().passed, 2);
}

#[test]
fn empty_batch_scores_zero() {
    let result = run(&[]);
    assert_eq!(result.rows_checked, 0);
    assert_eq!(result.score, 0);
    assert_eq!(result.rule_results.len(), 5);
    assert!(result.rule_results.values().all(|r| r.total() == 0));
}

#[test]
fn batch_is_capped() {
    let rows = vec![good_row(); 250];
    let result = run(&rows);
    assert_eq!(result.rows_checked, 200);
    assert_eq!(result.passed, 200);
}

#[test]
fn issue_list_matches_rule_issues() {
    let result = run(&[
        good_row().with("Currency", "EUR").with("Gross", 1.0),
        good_row().with("Date", "yesterday"),
    ]);
    let from_rules: usize = result.rule_results.values().map(|r| r.issues.len()).sum();
    assert_eq!(result.issues.len(), from_rules);
    assert_eq!(result.issues_by_row().len(), 2);
    assert_eq!(result.score, 0);
}

#[test]
fn totals_issue_shape() {
    let result = run(&[good_row().with("Gross", 106.0)]);
    insta::assert_json_snapshot!(result.issues[0], @r#"
    {
      "row": 1,
      "field": "invoice.total_incl_vat",
      "sourceField": "Gross",
      "rule": "TOTALS_BALANCE",
      "error": "Total including VAT (106) does not equal total excluding VAT (100) plus VAT amount (5); expected 105",
      "value": 106.0,
      "expected": 105.0
    }
    "#);
}
