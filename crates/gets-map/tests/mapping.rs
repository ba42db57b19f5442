use gets_map::{
    MappingEngine, analyze_coverage, find_close_matches, suggest_mappings, validate_mapping,
};
use gets_model::{FieldMapping, FieldType};
use gets_standards::{SchemaRegistry, default_registry};

fn registry() -> &'static SchemaRegistry {
    default_registry().expect("bundled catalog")
}

#[test]
fn suggests_date_and_total_columns() {
    let mapping = suggest_mappings(&["invoice_date", "total_amount"], registry());
    // "invoice_date" strips to "invoice", which every invoice path contains;
    // the first one in catalog order wins.
    assert_eq!(mapping.get("invoice_date"), Some(Some("invoice.id")));
    // "totalamount" has no substring match; the prefix pass finds "tota".
    assert_eq!(
        mapping.get("total_amount"),
        Some(Some("invoice.total_excl_vat"))
    );
}

#[test]
fn targets_are_not_reused() {
    let mapping = suggest_mappings(&["Seller Name", "seller_name", "name"], registry());
    assert_eq!(mapping.get("Seller Name"), Some(Some("seller.name")));
    // Both later columns would match seller.name first; they move on.
    assert_eq!(mapping.get("seller_name"), Some(Some("seller.trn")));
    assert_eq!(mapping.get("name"), Some(Some("buyer.name")));
    let targets: Vec<&str> = mapping.mapped().map(|(_, t)| t).collect();
    let mut deduped = targets.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(targets.len(), deduped.len());
}

#[test]
fn suggestions_preserve_input_order_and_validate() {
    let columns = vec![
        "Currency".to_string(),
        "Buyer TRN".to_string(),
        "qty".to_string(),
        "mystery".to_string(),
    ];
    let mapping = MappingEngine::new(registry()).suggest(&columns);
    let sources: Vec<&str> = mapping.iter().map(|(s, _)| s).collect();
    assert_eq!(sources, vec!["Currency", "Buyer TRN", "qty", "mystery"]);
    assert_eq!(mapping.get("Currency"), Some(Some("invoice.currency")));
    assert_eq!(mapping.get("Buyer TRN"), Some(Some("buyer.trn")));
    assert_eq!(mapping.get("qty"), Some(Some("lines[].qty")));
    assert_eq!(mapping.get("mystery"), Some(None));
    assert!(validate_mapping(&mapping, registry()).valid);
}

#[test]
fn coverage_of_single_mapped_column() {
    let mapping = FieldMapping::new()
        .with("inv_no", Some("invoice.id"))
        .with("amt", None);
    let report = analyze_coverage(&mapping, registry());

    assert_eq!(report.matched.len(), 1);
    assert_eq!(report.matched[0].source, "inv_no");
    assert_eq!(report.matched[0].target, "invoice.id");
    assert!(report.matched[0].required);
    assert_eq!(report.matched[0].field_type, FieldType::String);

    assert_eq!(report.missing.len(), 18);
    assert!(report.missing.iter().all(|m| m.field != "invoice.id"));
    assert_eq!(report.summary.total_standard_fields, 19);
    assert_eq!(report.summary.mapped_fields, 1);
    assert_eq!(report.summary.missing_fields, 18);
    assert_eq!(report.summary.coverage_percentage, 5);
}

#[test]
fn missing_fields_carry_descriptions() {
    let report = analyze_coverage(&FieldMapping::new(), registry());
    assert_eq!(report.missing.len(), 19);
    let currency = report
        .missing
        .iter()
        .find(|m| m.field == "invoice.currency")
        .unwrap();
    assert_eq!(currency.description, "Currency code (AED, SAR, MYR, USD)");
    assert_eq!(report.summary.coverage_percentage, 0);
    assert_eq!(report.missing_required().count(), 14);
}

#[test]
fn close_matches_are_ranked_and_capped() {
    let candidates = find_close_matches("invoice", registry());
    assert_eq!(candidates.len(), 3);
    assert!(candidates.iter().all(|c| c.score == 100));
    let fields: Vec<&str> = candidates.iter().map(|c| c.field.as_str()).collect();
    assert_eq!(
        fields,
        vec!["invoice.id", "invoice.issue_date", "invoice.currency"]
    );
}

#[test]
fn close_matches_only_for_unmapped_sources() {
    let mapping = FieldMapping::new()
        .with("Invoice No", Some("invoice.id"))
        .with("seller_vat", None)
        .with("zzz", None);
    let report = analyze_coverage(&mapping, registry());
    assert_eq!(report.close.len(), 1);
    let close = &report.close[0];
    assert_eq!(close.source, "seller_vat");
    // "sellervat" shares the "sell" prefix with every seller path.
    assert_eq!(close.suggestions.len(), 3);
    assert!(close.suggestions.iter().all(|c| c.field.starts_with("seller.")));
    assert!(close.suggestions.iter().all(|c| c.score == 50));
    assert_eq!(report.summary.close_matches, 1);
}

#[test]
fn close_matches_may_suggest_used_targets() {
    let mapping = FieldMapping::new()
        .with("Invoice No", Some("invoice.id"))
        .with("invoiceid", None);
    let report = analyze_coverage(&mapping, registry());
    assert_eq!(report.close[0].suggestions[0].field, "invoice.id");
    assert_eq!(report.close[0].suggestions[0].score, 100);
}
