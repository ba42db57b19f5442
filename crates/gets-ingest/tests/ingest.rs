use std::fs;

use gets_ingest::{IngestError, read_rows, read_upload};
use gets_model::CellValue;

#[test]
fn reads_csv_with_header_cleanup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invoices.csv");
    fs::write(
        &path,
        "\u{feff}Invoice  No,Currency, Seller Name\nINV-1,AED, Acme \nINV-2,SAR\n",
    )
    .unwrap();

    let upload = read_upload(&path).unwrap();
    assert_eq!(upload.columns, vec!["Invoice No", "Currency", "Seller Name"]);
    assert_eq!(upload.rows.len(), 2);
    let first = &upload.rows[0];
    assert_eq!(first.get("Seller Name"), Some(&CellValue::from(" Acme ")));
    let second = &upload.rows[1];
    assert_eq!(second.get("Seller Name"), Some(&CellValue::from("")));
}

#[test]
fn csv_is_capped_at_two_hundred_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.CSV");
    let mut body = String::from("id\n");
    for idx in 0..250 {
        body.push_str(&format!("{idx}\n"));
    }
    fs::write(&path, body).unwrap();
    let rows = read_rows(&path).unwrap();
    assert_eq!(rows.len(), 200);
    assert_eq!(rows[199].get("id"), Some(&CellValue::from("199")));
}

#[test]
fn reads_json_with_line_items() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invoices.json");
    fs::write(
        &path,
        r#"[{"invoice_id": "INV-1", "total": 105, "lines": [{"qty": 1, "unit_price": 100, "line_total": 100}]}]"#,
    )
    .unwrap();
    let rows = read_rows(&path).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].get("total"), Some(&CellValue::Number(105.0)));
    assert_eq!(rows[0].line_arrays().count(), 1);
}

#[test]
fn rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("invoices.xlsx");
    fs::write(&path, "").unwrap();
    let err = read_rows(&path).unwrap_err();
    assert!(matches!(err, IngestError::UnsupportedFormat { .. }));
}

#[test]
fn reports_invalid_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{").unwrap();
    let err = read_rows(&path).unwrap_err();
    assert!(matches!(err, IngestError::Json { .. }));
    assert!(err.to_string().starts_with("invalid JSON format in "));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_rows(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::Io { .. }));
}

#[test]
fn uploads_without_data_rows_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let cases = [
        ("header_only.csv", "invoice_id,currency\n"),
        ("blank.csv", ""),
        ("empty_array.json", "[]"),
    ];
    for (name, contents) in cases {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        let err = read_upload(&path).unwrap_err();
        assert!(matches!(err, IngestError::Empty { .. }), "{name}: {err}");
        assert!(
            err.to_string()
                .starts_with("the uploaded file contains no data")
        );
    }
}
