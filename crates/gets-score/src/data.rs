//! Data quality of the raw rows.
//!
//! Only top-level cells are inspected; line-item arrays count as filled
//! values of their own kind.

use std::collections::BTreeMap;

use gets_model::{CellValue, Row};

const COMPLETENESS_WEIGHT: f64 = 0.4;
const CONSISTENCY_WEIGHT: f64 = 0.3;
const FORMAT_WEIGHT: f64 = 0.3;

/// Penalty units for a padded string value.
const PADDING_PENALTY: f64 = 0.1;

/// Combined data quality score; 0 for an empty batch.
pub fn data_score(rows: &[Row]) -> u8 {
    if rows.is_empty() {
        return 0;
    }
    let score = COMPLETENESS_WEIGHT * completeness(rows)
        + CONSISTENCY_WEIGHT * consistency(rows)
        + FORMAT_WEIGHT * format_quality(rows);
    clamp_score(score)
}

/// Percentage of cells that are neither null nor empty text.
pub fn completeness(rows: &[Row]) -> f64 {
    let mut total = 0usize;
    let mut filled = 0usize;
    for row in rows {
        for (_, value) in row.iter() {
            total += 1;
            if !value.is_blank() {
                filled += 1;
            }
        }
    }
    if total == 0 {
        return 0.0;
    }
    filled as f64 / total as f64 * 100.0
}

/// Agreement of value kinds within each column.
///
/// Columns are taken from the first row. A column with at least two filled
/// values contributes the share of values whose kind differs from its first
/// filled value; the score is 100 minus the mean share.
pub fn consistency(rows: &[Row]) -> f64 {
    let Some(first) = rows.first() else {
        return 100.0;
    };
    let mut penalty = 0.0;
    let mut checked = 0usize;
    for column in first.keys() {
        let values: Vec<&CellValue> = rows
            .iter()
            .filter_map(|row| row.get(column))
            .filter(|value| !value.is_blank())
            .collect();
        let Some((head, rest)) = values.split_first() else {
            continue;
        };
        if rest.is_empty() {
            continue;
        }
        checked += 1;
        let kind = head.kind();
        let mismatched = rest.iter().filter(|value| value.kind() != kind).count();
        penalty += mismatched as f64 / values.len() as f64;
    }
    if checked == 0 {
        return 100.0;
    }
    (100.0 - penalty / checked as f64 * 100.0).max(0.0)
}

/// Penalises string values with leading or trailing whitespace, twice as
/// hard in name-like columns.
pub fn format_quality(rows: &[Row]) -> f64 {
    let mut penalty = 0.0;
    let mut checked = 0usize;
    // Lower-cased key lookups repeat across rows.
    let mut name_like: BTreeMap<&str, bool> = BTreeMap::new();
    for row in rows {
        for (column, value) in row.iter() {
            if value.is_blank() {
                continue;
            }
            checked += 1;
            let CellValue::Text(text) = value else {
                continue;
            };
            if text.trim() == text {
                continue;
            }
            penalty += PADDING_PENALTY;
            let is_name = *name_like
                .entry(column)
                .or_insert_with(|| column.to_lowercase().contains("name"));
            if is_name {
                penalty += PADDING_PENALTY;
            }
        }
    }
    if checked == 0 {
        return 100.0;
    }
    (100.0 - penalty / checked as f64 * 100.0).max(0.0)
}

pub(crate) fn clamp_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
