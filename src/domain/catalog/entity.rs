// src/domain/catalog/entity.rs
use super::value_objects::{EntityId, EntityKind};
use serde::Serialize;
use serde_json::Value;

/// A single row handed back by the data-access port.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRecord {
    pub id: EntityId,
    pub slug: Option<String>,
    pub data: Value,
}

impl CatalogRecord {
    /// The slug to address this record by; records without one fall back to
    /// their identifier.
    pub fn slug_or_id(&self) -> &str {
        match self.slug.as_deref() {
            Some(slug) if !slug.trim().is_empty() => slug,
            _ => self.id.as_str(),
        }
    }

    pub fn into_result(self, kind: EntityKind) -> SlugResult {
        let slug = self.slug_or_id().to_string();
        SlugResult {
            kind,
            id: self.id,
            slug,
            data: self.data,
        }
    }
}

/// Outcome of resolving a URL token to exactly one entity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlugResult {
    pub kind: EntityKind,
    pub id: EntityId,
    pub slug: String,
    pub data: Value,
}

impl SlugResult {
    /// Reads a string field from the payload, ignoring blanks.
    pub fn data_str(&self, field: &str) -> Option<&str> {
        self.data
            .get(field)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}
