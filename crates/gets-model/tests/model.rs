//! Tests for gets-model types.

use gets_model::{CellValue, FieldMapping, Issue, Record, RuleName, RuleResult, ValidationResult};

#[test]
fn issue_serializes_with_camel_case_keys() {
    let issue = Issue {
        row: 1,
        field: "invoice.currency".to_string(),
        source_field: "currency".to_string(),
        rule: RuleName::CurrencyAllowed,
        error: "Currency EUR is not allowed".to_string(),
        value: CellValue::from("EUR"),
        expected: Some(CellValue::from("AED, SAR, MYR, USD")),
        line: None,
    };
    insta::assert_json_snapshot!(issue, @r#"
    {
      "row": 1,
      "field": "invoice.currency",
      "sourceField": "currency",
      "rule": "CURRENCY_ALLOWED",
      "error": "Currency EUR is not allowed",
      "value": "EUR",
      "expected": "AED, SAR, MYR, USD"
    }
    "#);
}

#[test]
fn validation_result_round_trips() {
    let mut result = ValidationResult {
        rows_checked: 2,
        passed: 1,
        failed: 1,
        issues: vec![],
        rule_results: Default::default(),
        score: 50,
    };
    result.rule_results.insert(
        RuleName::LineMath,
        RuleResult {
            passed: 1,
            failed: 1,
            issues: vec![],
        },
    );
    let json = serde_json::to_string(&result).expect("serialize result");
    let round: ValidationResult = serde_json::from_str(&json).expect("deserialize result");
    assert_eq!(round, result);
}

#[test]
fn row_with_line_items_deserializes() {
    let row: Record = serde_json::from_str(
        r#"{"invoice_no": "INV-1", "total": 105, "note": null,
            "items": [{"qty": 2, "unit_price": "2.50", "line_total": 5}]}"#,
    )
    .expect("deserialize row");
    assert_eq!(row.get("invoice_no"), Some(&CellValue::from("INV-1")));
    assert_eq!(row.get("total"), Some(&CellValue::Number(105.0)));
    assert_eq!(row.get("note"), Some(&CellValue::Null));
    let (column, lines) = row.line_arrays().next().expect("line array");
    assert_eq!(column, "items");
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].get("unit_price").and_then(CellValue::as_number), Some(2.5));
}

#[test]
fn mapping_preserves_document_order() {
    let mapping: FieldMapping =
        serde_json::from_str(r#"{"b": "invoice.id", "a": "invoice.id", "c": null}"#)
            .expect("deserialize mapping");
    let sources: Vec<_> = mapping.iter().map(|(source, _)| source).collect();
    assert_eq!(sources, vec!["b", "a", "c"]);
}
