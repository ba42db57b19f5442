#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StandardsError {
    #[error("failed to read schema {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse schema JSON: {source}")]
    Json {
        #[source]
        source: serde_json::Error,
    },

    #[error("schema defines no fields")]
    EmptyCatalog,

    #[error("duplicate field path in schema: {path}")]
    DuplicatePath { path: String },

    #[error("invalid pattern for {path}: {source}")]
    InvalidPattern {
        path: String,
        #[source]
        source: regex::Error,
    },
}

impl StandardsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
