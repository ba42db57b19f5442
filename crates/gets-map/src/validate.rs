//! Mapping validation against the schema catalog.

use gets_model::FieldMapping;
use gets_standards::SchemaRegistry;
use serde::Serialize;

use crate::error::MappingError;

/// Result of checking every target of a mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingValidation {
    pub valid: bool,
    /// Unknown targets, in mapping order. A target that appears twice is
    /// listed once.
    pub invalid_targets: Vec<String>,
}

/// Checks that every non-empty target names a catalog path.
pub fn validate_mapping(mapping: &FieldMapping, registry: &SchemaRegistry) -> MappingValidation {
    let mut invalid_targets: Vec<String> = Vec::new();
    for (_, target) in mapping.mapped() {
        if !registry.is_valid_path(target) && !invalid_targets.iter().any(|t| t == target) {
            invalid_targets.push(target.to_string());
        }
    }
    MappingValidation {
        valid: invalid_targets.is_empty(),
        invalid_targets,
    }
}

/// Returns the mapping unchanged if every target is known to the registry.
pub fn validated(
    mapping: FieldMapping,
    registry: &SchemaRegistry,
) -> Result<FieldMapping, MappingError> {
    let report = validate_mapping(&mapping, registry);
    if report.valid {
        Ok(mapping)
    } else {
        Err(MappingError::InvalidTargets {
            targets: report.invalid_targets,
        })
    }
}

/// Returns the first source column, in mapping order, mapped to `path`.
pub fn find_mapped_source_column<'m>(path: &str, mapping: &'m FieldMapping) -> Option<&'m str> {
    mapping
        .mapped()
        .find(|(_, target)| *target == path)
        .map(|(source, _)| source)
}

/// Counts used for a mapping overview.
///
/// Serialises as `mappedFields` / `totalStandardFields` plus the column and
/// required-field breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingSummary {
    /// Source columns that have a target.
    pub mapped_fields: usize,
    pub total_standard_fields: usize,
    pub source_columns: usize,
    pub unmapped_columns: usize,
    pub required_mapped: usize,
    pub required_total: usize,
}

impl MappingSummary {
    pub fn new(mapping: &FieldMapping, registry: &SchemaRegistry) -> Self {
        let mapped_fields = mapping.mapped_count();
        let required_total = registry.required_fields().count();
        let required_mapped = registry
            .required_fields()
            .filter(|field| mapping.targets(&field.path))
            .count();
        Self {
            mapped_fields,
            total_standard_fields: registry.len(),
            source_columns: mapping.len(),
            unmapped_columns: mapping.len() - mapped_fields,
            required_mapped,
            required_total,
        }
    }
}
