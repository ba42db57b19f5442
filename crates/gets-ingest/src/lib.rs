#![deny(unsafe_code)]

//! Loading of uploaded invoice files into row batches.

mod csv_rows;
mod detect;
mod error;
mod json_rows;

use std::path::Path;

use gets_model::Row;

pub use crate::csv_rows::{normalize_header, read_csv};
pub use crate::detect::{DetectedType, TYPE_SAMPLE_ROWS, detect_column_types};
pub use crate::error::IngestError;
pub use crate::json_rows::{parse_json, read_json};

/// Rows of one upload plus its column names in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Upload {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// Reads a `.csv` or `.json` upload, choosing the parser by extension.
///
/// An upload without data rows is rejected with [`IngestError::Empty`].
pub fn read_upload(path: &Path) -> Result<Upload, IngestError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    let upload = match extension.as_deref() {
        Some("csv") => read_csv(path)?,
        Some("json") => read_json(path)?,
        _ => {
            return Err(IngestError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };
    if upload.rows.is_empty() {
        return Err(IngestError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(upload)
}

/// Reads only the rows of an upload.
pub fn read_rows(path: &Path) -> Result<Vec<Row>, IngestError> {
    read_upload(path).map(|upload| upload.rows)
}
