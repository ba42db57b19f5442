//! Schema catalog path resolution.

use std::path::PathBuf;

/// Environment variable for overriding the bundled schema catalog.
pub const SCHEMA_ENV_VAR: &str = "GETS_SCHEMA_PATH";

/// Returns the catalog override from the environment, if set and non-empty.
pub fn schema_override() -> Option<PathBuf> {
    std::env::var_os(SCHEMA_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
