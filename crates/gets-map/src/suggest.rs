//! Greedy column-to-field suggestion.

use std::collections::BTreeSet;

use gets_model::{FieldMapping, StandardField};
use gets_standards::SchemaRegistry;
use tracing::{debug, trace};

use crate::normalize::{compact_path, compact_source, mutual_contains, prefix, strip_suffixes};

/// Characters compared by the prefix pass.
const PREFIX_LEN: usize = 4;

/// Proposes a mapping for uploaded source columns.
///
/// Two greedy passes run in input order. The first compares suffix-stripped
/// names by mutual containment; the second compares four-character
/// prefixes for columns the first pass left open. In both passes the first
/// catalog field whose path is still unassigned wins, so no target is
/// proposed twice.
pub struct MappingEngine<'a> {
    registry: &'a SchemaRegistry,
}

impl<'a> MappingEngine<'a> {
    pub fn new(registry: &'a SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Returns one entry per distinct source column, in input order.
    ///
    /// Columns neither pass could match are present with a `None` target.
    pub fn suggest<S: AsRef<str>>(&self, source_columns: &[S]) -> FieldMapping {
        let fields = self.registry.fields();
        let mut assigned: Vec<Option<&str>> = vec![None; source_columns.len()];
        let mut used_targets: BTreeSet<&str> = BTreeSet::new();
        let repeated = repeated_columns(source_columns);

        for (idx, column) in source_columns.iter().enumerate() {
            if repeated[idx] {
                continue;
            }
            let column = column.as_ref();
            let compact = compact_source(column);
            let key = strip_suffixes(&compact);
            if key.is_empty() {
                continue;
            }
            let found = first_unused(fields, &used_targets, |field| {
                let path = compact_path(&field.path);
                mutual_contains(strip_suffixes(&path), key)
            });
            if let Some(target) = found {
                trace!(column, target, "substring match");
                used_targets.insert(target);
                assigned[idx] = Some(target);
            }
        }

        for (idx, column) in source_columns.iter().enumerate() {
            if repeated[idx] || assigned[idx].is_some() {
                continue;
            }
            let column = column.as_ref();
            let compact = compact_source(column);
            if compact.is_empty() {
                continue;
            }
            let source_prefix = prefix(&compact, PREFIX_LEN);
            let found = first_unused(fields, &used_targets, |field| {
                let path = compact_path(&field.path);
                path.contains(source_prefix) || compact.contains(prefix(&path, PREFIX_LEN))
            });
            if let Some(target) = found {
                trace!(column, target, "prefix match");
                used_targets.insert(target);
                assigned[idx] = Some(target);
            }
        }

        let mut mapping = FieldMapping::new();
        for ((column, target), repeated) in source_columns.iter().zip(assigned).zip(repeated) {
            if !repeated {
                mapping.insert(column.as_ref(), target.map(str::to_string));
            }
        }
        debug!(
            columns = source_columns.len(),
            mapped = mapping.mapped_count(),
            "suggested mappings"
        );
        mapping
    }
}

/// Flags every occurrence of a column name after its first.
fn repeated_columns<S: AsRef<str>>(source_columns: &[S]) -> Vec<bool> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();
    source_columns
        .iter()
        .map(|column| !seen.insert(column.as_ref()))
        .collect()
}

fn first_unused<'f>(
    fields: &'f [StandardField],
    used: &BTreeSet<&str>,
    mut matches: impl FnMut(&StandardField) -> bool,
) -> Option<&'f str> {
    fields
        .iter()
        .filter(|field| !used.contains(field.path.as_str()))
        .find(|field| matches(field))
        .map(|field| field.path.as_str())
}

/// Convenience wrapper around [`MappingEngine::suggest`].
pub fn suggest_mappings<S: AsRef<str>>(
    source_columns: &[S],
    registry: &SchemaRegistry,
) -> FieldMapping {
    MappingEngine::new(registry).suggest(source_columns)
}
