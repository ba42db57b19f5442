//! Loading of the schema, mapping and questionnaire files.

use std::borrow::Cow;
use std::path::Path;

use anyhow::{Context, Result};
use gets_map::validated;
use gets_model::{FieldMapping, Questionnaire};
use gets_standards::{SchemaRegistry, default_registry, schema_override};
use tracing::{debug, info};

/// Returns the catalog from `--schema`, `GETS_SCHEMA_PATH`, or the bundled
/// default, in that order.
pub fn load_registry(schema: Option<&Path>) -> Result<Cow<'static, SchemaRegistry>> {
    let path = schema.map(Path::to_path_buf).or_else(schema_override);
    match path {
        Some(path) => {
            let registry = SchemaRegistry::load(&path)
                .with_context(|| format!("load schema: {}", path.display()))?;
            Ok(Cow::Owned(registry))
        }
        None => {
            let registry = default_registry().context("load bundled schema")?;
            debug!(
                schema = registry.name(),
                version = registry.version(),
                "using bundled schema"
            );
            Ok(Cow::Borrowed(registry))
        }
    }
}

/// Reads a mapping file and rejects targets unknown to `registry`.
pub fn load_mapping(path: &Path, registry: &SchemaRegistry) -> Result<FieldMapping> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read mapping: {}", path.display()))?;
    let mapping: FieldMapping = serde_json::from_str(&contents)
        .with_context(|| format!("parse mapping: {}", path.display()))?;
    let mapping = validated(mapping, registry)
        .with_context(|| format!("mapping rejected: {}", path.display()))?;
    info!(
        columns = mapping.len(),
        mapped = mapping.mapped_count(),
        "mapping accepted"
    );
    Ok(mapping)
}

/// Reads questionnaire answers.
///
/// A document that is not a JSON object yields `None`, which scores as a
/// neutral posture.
pub fn load_questionnaire(path: &Path) -> Result<Option<Questionnaire>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("read questionnaire: {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse questionnaire: {}", path.display()))?;
    if !value.is_object() {
        debug!(path = %path.display(), "questionnaire is not an object; ignoring");
        return Ok(None);
    }
    let answers = serde_json::from_value(value)
        .with_context(|| format!("parse questionnaire: {}", path.display()))?;
    Ok(Some(answers))
}
