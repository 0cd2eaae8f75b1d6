// src/infrastructure/repositories/memory_catalog.rs
use crate::domain::catalog::{
    CatalogLookup, CatalogRecord, Collection, EntityId, Filter, FilterValue, LookupQuery,
};
use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::{collections::HashMap, path::Path, sync::RwLock};

/// Seed document layout: one array of JSON objects per collection.
#[derive(Debug, Default, Deserialize)]
struct CatalogSeed {
    #[serde(default)]
    profiles: Vec<Value>,
    #[serde(default)]
    sports: Vec<Value>,
    #[serde(default)]
    programs: Vec<Value>,
}

/// JSON-backed catalog for local development and tests. Filters compare
/// top-level fields of each stored object.
#[derive(Default)]
pub struct InMemoryCatalog {
    collections: RwLock<HashMap<Collection, Vec<Value>>>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_seed(seed: Value) -> DomainResult<Self> {
        let seed: CatalogSeed = serde_json::from_value(seed)
            .map_err(|err| DomainError::Validation(format!("invalid catalog seed: {err}")))?;

        let catalog = Self::new();
        for (collection, records) in [
            (Collection::Profiles, seed.profiles),
            (Collection::Sports, seed.sports),
            (Collection::Programs, seed.programs),
        ] {
            for record in records {
                catalog.insert(collection, record)?;
            }
        }
        Ok(catalog)
    }

    pub fn load(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| {
            DomainError::Persistence(format!("cannot read catalog seed {}: {err}", path.display()))
        })?;
        let seed = serde_json::from_str(&raw)
            .map_err(|err| DomainError::Validation(format!("invalid catalog seed: {err}")))?;
        Self::from_seed(seed)
    }

    pub fn insert(&self, collection: Collection, record: Value) -> DomainResult<()> {
        if record.get("id").and_then(Value::as_str).is_none() {
            return Err(DomainError::Validation(format!(
                "{} record requires a string id",
                collection.table()
            )));
        }

        self.collections
            .write()
            .map_err(|_| poisoned())?
            .entry(collection)
            .or_default()
            .push(record);
        Ok(())
    }

    pub fn count(&self, collection: Collection) -> usize {
        self.collections
            .read()
            .map(|map| map.get(&collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    fn find_first(
        &self,
        collection: Collection,
        predicate: impl Fn(&Value) -> bool,
    ) -> DomainResult<Option<CatalogRecord>> {
        let map = self.collections.read().map_err(|_| poisoned())?;
        map.get(&collection)
            .and_then(|records| records.iter().find(|record| predicate(*record)))
            .map(to_record)
            .transpose()
    }
}

fn poisoned() -> DomainError {
    DomainError::Persistence("in-memory catalog lock poisoned".into())
}

fn to_record(value: &Value) -> DomainResult<CatalogRecord> {
    let id = value
        .get("id")
        .and_then(Value::as_str)
        .ok_or_else(|| DomainError::Persistence("stored record lost its id".into()))?;

    Ok(CatalogRecord {
        id: EntityId::new(id)?,
        slug: value.get("slug").and_then(Value::as_str).map(str::to_string),
        data: value.clone(),
    })
}

fn value_matches(actual: Option<&Value>, expected: &FilterValue) -> bool {
    match (actual, expected) {
        (Some(Value::String(actual)), FilterValue::Text(expected)) => actual == expected,
        (Some(Value::Bool(actual)), FilterValue::Bool(expected)) => actual == expected,
        _ => false,
    }
}

fn filter_matches(record: &Value, filter: &Filter) -> bool {
    let actual = record.get(filter.field());
    match filter {
        Filter::Eq(_, expected) => value_matches(actual, expected),
        Filter::In(_, candidates) => candidates.iter().any(|c| value_matches(actual, c)),
    }
}

#[async_trait]
impl CatalogLookup for InMemoryCatalog {
    async fn lookup_one(&self, query: &LookupQuery) -> DomainResult<Option<CatalogRecord>> {
        self.find_first(query.collection, |record| {
            query.filters.iter().all(|filter| filter_matches(record, filter))
        })
    }

    async fn resolve_sport(&self, slug: &str) -> DomainResult<Option<CatalogRecord>> {
        self.find_first(Collection::Sports, |record| {
            record.get("slug").and_then(Value::as_str) == Some(slug)
                && record.get("is_active").and_then(Value::as_bool) != Some(false)
        })
    }
}
