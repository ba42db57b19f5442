//! Source column to standard field mapping.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Mapping from source column name to a standard field path.
///
/// Entries keep the order in which they were inserted (or appeared in the
/// source document). A `None` target marks the column as unmapped. Empty
/// string targets are normalised to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMapping {
    entries: Vec<(String, Option<String>)>,
}

impl FieldMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, source: impl Into<String>, target: Option<&str>) -> Self {
        self.insert(source, target.map(str::to_string));
        self
    }

    /// Sets the target for a source column, replacing any previous target.
    pub fn insert(&mut self, source: impl Into<String>, target: Option<String>) {
        let source = source.into();
        let target = target.filter(|value| !value.is_empty());
        match self.entries.iter_mut().find(|(name, _)| *name == source) {
            Some((_, existing)) => *existing = target,
            None => self.entries.push((source, target)),
        }
    }

    /// Returns the target for a source column.
    ///
    /// The outer `Option` is `None` when the column is not part of the
    /// mapping; the inner one is `None` when the column is unmapped.
    pub fn get(&self, source: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|(name, _)| name == source)
            .map(|(_, target)| target.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(source, target)| (source.as_str(), target.as_deref()))
    }

    /// Iterates over `(source, target)` pairs that have a target.
    pub fn mapped(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter_map(|(source, target)| target.as_deref().map(|t| (source.as_str(), t)))
    }

    /// Iterates over source columns without a target.
    pub fn unmapped_sources(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, target)| target.is_none())
            .map(|(source, _)| source.as_str())
    }

    /// Returns true if any source column maps to `path`.
    pub fn targets(&self, path: &str) -> bool {
        self.mapped().any(|(_, target)| target == path)
    }

    pub fn mapped_count(&self) -> usize {
        self.mapped().count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Option<String>)> for FieldMapping {
    fn from_iter<I: IntoIterator<Item = (S, Option<String>)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (source, target) in iter {
            mapping.insert(source, target);
        }
        mapping
    }
}

impl Serialize for FieldMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (source, target) in &self.entries {
            map.serialize_entry(source, target)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for FieldMapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct MappingVisitor;

        impl<'de> Visitor<'de> for MappingVisitor {
            type Value = FieldMapping;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object mapping source columns to field paths or null")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> Result<FieldMapping, A::Error> {
                let mut mapping = FieldMapping::new();
                while let Some((source, target)) =
                    access.next_entry::<String, Option<String>>()?
                {
                    mapping.insert(source, target);
                }
                Ok(mapping)
            }
        }

        deserializer.deserialize_map(MappingVisitor)
    }
}
