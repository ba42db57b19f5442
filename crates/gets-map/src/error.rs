//! Error types for mapping operations.

/// Errors from mapping operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MappingError {
    /// One or more targets are not paths of the schema.
    #[error("the following target fields are not valid: {}", targets.join(", "))]
    InvalidTargets { targets: Vec<String> },
}
