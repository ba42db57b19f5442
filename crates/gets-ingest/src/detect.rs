use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use gets_model::{CellValue, Row};
use regex::Regex;
use serde::Serialize;

/// Rows inspected when guessing column types.
pub const TYPE_SAMPLE_ROWS: usize = 10;

static DATE_SHAPE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("Invalid date shape regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectedType {
    Date,
    Number,
    Text,
}

impl DetectedType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetectedType::Date => "date",
            DetectedType::Number => "number",
            DetectedType::Text => "text",
        }
    }
}

impl fmt::Display for DetectedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guesses a type per column from the first [`TYPE_SAMPLE_ROWS`] rows.
///
/// A column whose filled values all look like `YYYY-MM-DD` is a date, one
/// whose values all parse as numbers is a number; anything else, including
/// a column with no filled values, is text.
pub fn detect_column_types(rows: &[Row]) -> BTreeMap<String, DetectedType> {
    let sample = &rows[..rows.len().min(TYPE_SAMPLE_ROWS)];
    let mut types = BTreeMap::new();
    for row in sample {
        for column in row.keys() {
            if types.contains_key(column) {
                continue;
            }
            let values: Vec<&CellValue> = sample
                .iter()
                .filter_map(|row| row.get(column))
                .filter(|value| !value.is_blank())
                .collect();
            types.insert(column.to_string(), classify(&values));
        }
    }
    types
}

fn classify(values: &[&CellValue]) -> DetectedType {
    if values.is_empty() {
        return DetectedType::Text;
    }
    let is_date = values.iter().all(|value| {
        value
            .scalar_text()
            .is_some_and(|text| DATE_SHAPE_REGEX.is_match(&text))
    });
    if is_date {
        return DetectedType::Date;
    }
    if values.iter().all(|value| value.as_number().is_some()) {
        return DetectedType::Number;
    }
    DetectedType::Text
}

#[cfg(test)]
mod tests {
    use gets_model::Record;

    use super::*;

    #[test]
    fn classifies_columns() {
        let rows = vec![
            Record::new()
                .with("date", "2024-01-15")
                .with("amount", "10.50")
                .with("name", "Acme")
                .with("empty", ""),
            Record::new()
                .with("date", "2024-13-45")
                .with("amount", 3.0)
                .with("name", "42")
                .with("empty", CellValue::Null),
        ];
        let types = detect_column_types(&rows);
        assert_eq!(types["date"], DetectedType::Date);
        assert_eq!(types["amount"], DetectedType::Number);
        assert_eq!(types["name"], DetectedType::Text);
        assert_eq!(types["empty"], DetectedType::Text);
    }

    #[test]
    fn only_samples_leading_rows() {
        let mut rows = vec![Record::new().with("qty", "1"); TYPE_SAMPLE_ROWS];
        rows.push(Record::new().with("qty", "many").with("late", "x"));
        let types = detect_column_types(&rows);
        assert_eq!(types["qty"], DetectedType::Number);
        assert!(!types.contains_key("late"));
    }
}
