#![deny(unsafe_code)]

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::OnceLock;

use gets_model::{Category, StandardField};
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::StandardsError;

const BUNDLED_SCHEMA: &str = include_str!("../data/gets_v0_1.json");

#[derive(Debug, Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    version: Option<String>,
    fields: Vec<StandardField>,
}

/// The standard field catalog every other component validates against.
///
/// Immutable once built. Engines take it by reference; the bundled catalog
/// is available process-wide through [`default_registry`].
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    name: String,
    version: String,
    fields: Vec<StandardField>,
    paths: BTreeSet<String>,
}

impl SchemaRegistry {
    /// Parses and checks a catalog document.
    ///
    /// Field order is preserved; it is the "catalog order" used for
    /// first-match-wins mapping suggestions.
    pub fn from_json_str(contents: &str) -> Result<Self, StandardsError> {
        let document: SchemaDocument =
            serde_json::from_str(contents).map_err(|source| StandardsError::Json { source })?;
        Self::from_fields(
            document.name.unwrap_or_else(|| "GETS".to_string()),
            document.version.unwrap_or_default(),
            document.fields,
        )
    }

    /// Loads a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self, StandardsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| StandardsError::io(path, e))?;
        let registry = Self::from_json_str(&contents)?;
        info!(
            path = %path.display(),
            fields = registry.fields.len(),
            "loaded schema catalog"
        );
        Ok(registry)
    }

    /// Parses the catalog bundled with this crate.
    pub fn bundled() -> Result<Self, StandardsError> {
        Self::from_json_str(BUNDLED_SCHEMA)
    }

    pub fn from_fields(
        name: impl Into<String>,
        version: impl Into<String>,
        fields: Vec<StandardField>,
    ) -> Result<Self, StandardsError> {
        if fields.is_empty() {
            return Err(StandardsError::EmptyCatalog);
        }
        let mut paths = BTreeSet::new();
        for field in &fields {
            if !paths.insert(field.path.clone()) {
                return Err(StandardsError::DuplicatePath {
                    path: field.path.clone(),
                });
            }
            if let Some(pattern) = &field.pattern {
                regex::Regex::new(pattern).map_err(|source| StandardsError::InvalidPattern {
                    path: field.path.clone(),
                    source,
                })?;
            }
        }
        let registry = Self {
            name: name.into(),
            version: version.into(),
            fields,
            paths,
        };
        debug!(
            schema = %registry.name,
            version = %registry.version,
            fields = registry.fields.len(),
            "schema registry built"
        );
        Ok(registry)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// All fields in catalog order.
    pub fn fields(&self) -> &[StandardField] {
        &self.fields
    }

    pub fn is_valid_path(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn field(&self, path: &str) -> Option<&StandardField> {
        self.fields.iter().find(|field| field.path == path)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &StandardField> {
        self.fields.iter().filter(|field| field.required)
    }

    pub fn optional_fields(&self) -> impl Iterator<Item = &StandardField> {
        self.fields.iter().filter(|field| !field.required)
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &StandardField> {
        self.fields
            .iter()
            .filter(move |field| field.category() == Some(category))
    }
}

static DEFAULT_REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();

/// Returns the bundled GETS v0.1 catalog.
///
/// The catalog is parsed on first access and shared read-only afterwards.
pub fn default_registry() -> Result<&'static SchemaRegistry, StandardsError> {
    if let Some(registry) = DEFAULT_REGISTRY.get() {
        return Ok(registry);
    }
    let registry = SchemaRegistry::bundled()?;
    Ok(DEFAULT_REGISTRY.get_or_init(|| registry))
}
