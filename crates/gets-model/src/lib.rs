#![deny(unsafe_code)]

pub mod coverage;
pub mod field;
pub mod mapping;
pub mod score;
pub mod validation;
pub mod value;

pub use coverage::{
    CloseCandidate, CloseMatch, CoverageReport, CoverageSummary, MatchedField, MissingField,
};
pub use field::{Category, FieldType, StandardField};
pub use mapping::FieldMapping;
pub use score::{CategoryScores, Questionnaire, Readiness};
pub use validation::{Issue, RuleName, RuleResult, ValidationResult};
pub use value::{CellValue, Record, Row, ValueKind};

/// Upper bound on the number of rows processed in one batch.
pub const MAX_BATCH_ROWS: usize = 200;
