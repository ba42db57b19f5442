use gets_model::ValueKind;

/// A rule could not evaluate a row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleFault {
    #[error("expected a scalar value in column '{column}' for {field}, found {found:?}")]
    UnexpectedShape {
        field: &'static str,
        column: String,
        found: ValueKind,
    },
}
