// src/domain/catalog/repository.rs
use super::entity::CatalogRecord;
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

/// Record collections the marketplace data service exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Profiles,
    Sports,
    Programs,
}

impl Collection {
    pub const fn table(self) -> &'static str {
        match self {
            Self::Profiles => "profiles",
            Self::Sports => "sports",
            Self::Programs => "programs",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Bool(bool),
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Field constraint. Field names are fixed by the resolvers, never taken
/// from request input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    Eq(&'static str, FilterValue),
    In(&'static str, Vec<FilterValue>),
}

impl Filter {
    pub fn eq(field: &'static str, value: impl Into<FilterValue>) -> Self {
        Self::Eq(field, value.into())
    }

    pub fn one_of<I, V>(field: &'static str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<FilterValue>,
    {
        Self::In(field, values.into_iter().map(Into::into).collect())
    }

    pub const fn field(&self) -> &'static str {
        match self {
            Self::Eq(field, _) | Self::In(field, _) => field,
        }
    }
}

/// Equality-filtered single-record lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub collection: Collection,
    pub filters: Vec<Filter>,
}

impl LookupQuery {
    pub const fn new(collection: Collection) -> Self {
        Self {
            collection,
            filters: Vec::new(),
        }
    }

    pub fn with(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }
}

/// Data-access capability the resolvers depend on. Implementations may be a
/// relational database, a document store or an HTTP API.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn lookup_one(&self, query: &LookupQuery) -> DomainResult<Option<CatalogRecord>>;

    /// Custom remote procedure resolving a sport by slug.
    async fn resolve_sport(&self, slug: &str) -> DomainResult<Option<CatalogRecord>>;
}
