#![deny(unsafe_code)]

//! Field mapping for GETS invoices: suggestions for uploaded columns,
//! mapping validation, and catalog coverage.

pub mod coverage;
pub mod error;
pub mod normalize;
pub mod suggest;
pub mod validate;

pub use crate::coverage::{analyze_coverage, find_close_matches};
pub use crate::error::MappingError;
pub use crate::suggest::{MappingEngine, suggest_mappings};
pub use crate::validate::{
    MappingSummary, MappingValidation, find_mapped_source_column, validate_mapping, validated,
};
