// tests/support/mocks/catalog.rs
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::{
    Mutex,
    atomic::{AtomicBool, Ordering},
};
use trainer_market_core::domain::catalog::{CatalogLookup, CatalogRecord, Collection, LookupQuery};
use trainer_market_core::domain::errors::{DomainError, DomainResult};
use trainer_market_core::infrastructure::repositories::InMemoryCatalog;

/// One round trip observed by [`RecordingCatalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// Collection plus the field of the first filter (`slug` or `id`).
    Lookup(Collection, &'static str),
    Sport(String),
}

/// In-memory catalog that records every call and can be switched into a
/// mode where every call, or every call touching one collection, fails like
/// an unreachable backend.
#[derive(Default)]
pub struct RecordingCatalog {
    inner: InMemoryCatalog,
    calls: Mutex<Vec<Call>>,
    failing: AtomicBool,
    failing_collections: Mutex<HashSet<Collection>>,
}

impl RecordingCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        let catalog = Self::default();
        catalog.set_failing(true);
        catalog
    }

    pub fn with(self, collection: Collection, record: Value) -> Self {
        self.inner
            .insert(collection, record)
            .expect("fixture record should have an id");
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Fails only the calls that read `collection`; the sport procedure
    /// counts as a read of [`Collection::Sports`].
    pub fn fail_collection(&self, collection: Collection) {
        self.failing_collections.lock().unwrap().insert(collection);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> DomainResult<()> {
        let collection = match &call {
            Call::Lookup(collection, _) => *collection,
            Call::Sport(_) => Collection::Sports,
        };
        self.calls.lock().unwrap().push(call);
        if self.failing.load(Ordering::SeqCst)
            || self.failing_collections.lock().unwrap().contains(&collection)
        {
            return Err(DomainError::Persistence("connection refused".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogLookup for RecordingCatalog {
    async fn lookup_one(&self, query: &LookupQuery) -> DomainResult<Option<CatalogRecord>> {
        let by = query.filters.first().map_or("", |f| f.field());
        self.record(Call::Lookup(query.collection, by))?;
        self.inner.lookup_one(query).await
    }

    async fn resolve_sport(&self, slug: &str) -> DomainResult<Option<CatalogRecord>> {
        self.record(Call::Sport(slug.to_string()))?;
        self.inner.resolve_sport(slug).await
    }
}
