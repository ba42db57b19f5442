use std::fmt;
use std::path::Path;

use gets_model::{MAX_BATCH_ROWS, Record};
use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::debug;

use crate::Upload;
use crate::error::IngestError;

/// A JSON upload: an array of row objects or one row object.
struct Document(Vec<Record>);

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct DocumentVisitor;

        impl<'de> Visitor<'de> for DocumentVisitor {
            type Value = Document;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array of row objects or a single row object")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Document, A::Error> {
                let mut rows = Vec::new();
                while let Some(row) = seq.next_element::<Record>()? {
                    rows.push(row);
                }
                Ok(Document(rows))
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Document, A::Error> {
                let row = Record::deserialize(MapAccessDeserializer::new(map))?;
                Ok(Document(vec![row]))
            }
        }

        deserializer.deserialize_any(DocumentVisitor)
    }
}

/// Parses a JSON upload held in memory.
///
/// Columns are listed in first-seen order across the kept rows.
pub fn parse_json(contents: &str) -> Result<Upload, serde_json::Error> {
    let Document(mut rows) = serde_json::from_str(contents)?;
    if rows.len() > MAX_BATCH_ROWS {
        debug!(
            rows = rows.len(),
            limit = MAX_BATCH_ROWS,
            "truncating json upload"
        );
        rows.truncate(MAX_BATCH_ROWS);
    }
    let mut columns: Vec<String> = Vec::new();
    for row in &rows {
        for key in row.keys() {
            if !columns.iter().any(|column| column == key) {
                columns.push(key.to_string());
            }
        }
    }
    Ok(Upload { columns, rows })
}

pub fn read_json(path: &Path) -> Result<Upload, IngestError> {
    let contents = std::fs::read_to_string(path).map_err(|e| IngestError::io(path, e))?;
    let upload = parse_json(&contents).map_err(|source| IngestError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(
        path = %path.display(),
        columns = upload.columns.len(),
        rows = upload.rows.len(),
        "read json upload"
    );
    Ok(upload)
}
