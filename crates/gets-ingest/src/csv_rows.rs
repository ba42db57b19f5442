use std::fs::File;
use std::path::Path;

use csv::ReaderBuilder;
use gets_model::{CellValue, MAX_BATCH_ROWS, Record};
use tracing::debug;

use crate::Upload;
use crate::error::IngestError;

/// Trims the header, drops a byte-order mark and collapses inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_matches(|ch: char| ch == '\u{feff}' || ch.is_whitespace())
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Reads a CSV file whose first record is the header.
///
/// Cells are kept as text, untrimmed. Short records are padded with empty
/// text and extra cells are dropped. At most [`MAX_BATCH_ROWS`] data rows
/// are read.
pub fn read_csv(path: &Path) -> Result<Upload, IngestError> {
    let file = File::open(path).map_err(|e| IngestError::io(path, e))?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut records = reader.records();
    let columns: Vec<String> = match records.next() {
        Some(header) => header
            .map_err(|source| csv_error(path, source))?
            .iter()
            .map(normalize_header)
            .collect(),
        None => return Ok(Upload::default()),
    };

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in records {
        let record = record.map_err(|source| csv_error(path, source))?;
        if rows.len() >= MAX_BATCH_ROWS {
            skipped += 1;
            continue;
        }
        let row: Record = columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell = record.get(idx).unwrap_or_default();
                (column.clone(), CellValue::Text(cell.to_string()))
            })
            .collect();
        rows.push(row);
    }
    debug!(
        path = %path.display(),
        columns = columns.len(),
        rows = rows.len(),
        skipped,
        "read csv upload"
    );
    Ok(Upload { columns, rows })
}

fn csv_error(path: &Path, source: csv::Error) -> IngestError {
    IngestError::Csv {
        path: path.to_path_buf(),
        source,
    }
}
