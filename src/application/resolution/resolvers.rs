// src/application/resolution/resolvers.rs
use super::outcome::Resolution;
use crate::domain::catalog::{
    CatalogLookup, CatalogRecord, Collection, EntityKind, Filter, LookupQuery, ProgramStatus,
    SlugResult,
};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use std::sync::Arc;

const TRAINER_ROLE: &str = "trainer";

/// One strategy in the resolution chain. Each call performs exactly one
/// round trip to the data service; failures are logged and reported as
/// [`Resolution::UpstreamError`], never raised.
#[async_trait]
pub trait EntityResolver: Send + Sync {
    fn kind(&self) -> EntityKind;

    async fn resolve_by_slug(&self, slug: &str) -> Resolution<SlugResult>;

    async fn resolve_by_id(&self, _id: &str) -> Resolution<SlugResult> {
        Resolution::NotFound
    }
}

fn settle(
    kind: EntityKind,
    by: &'static str,
    token: &str,
    result: DomainResult<Option<CatalogRecord>>,
) -> Resolution<SlugResult> {
    match Resolution::from(result) {
        Resolution::UpstreamError(error) => {
            tracing::warn!(%kind, by, token, %error, "lookup failed, treating as miss");
            Resolution::UpstreamError(error)
        }
        Resolution::NotFound => {
            tracing::debug!(%kind, by, token, "no match");
            Resolution::NotFound
        }
        found => found.map(|record| record.into_result(kind)),
    }
}

/// Active profiles with the trainer role.
pub struct TrainerResolver {
    lookup: Arc<dyn CatalogLookup>,
}

impl TrainerResolver {
    pub fn new(lookup: Arc<dyn CatalogLookup>) -> Self {
        Self { lookup }
    }

    fn query(field: &'static str, value: &str) -> LookupQuery {
        LookupQuery::new(Collection::Profiles)
            .with(Filter::eq(field, value))
            .with(Filter::eq("role", TRAINER_ROLE))
            .with(Filter::eq("is_active", true))
    }
}

#[async_trait]
impl EntityResolver for TrainerResolver {
    fn kind(&self) -> EntityKind {
        EntityKind::Trainer
    }

    async fn resolve_by_slug(&self, slug: &str) -> Resolution<SlugResult> {
        let result = self.lookup.lookup_one(&Self::query("slug", slug)).await;
        settle(self.kind(), "slug", slug, result)
    }

    async fn resolve_by_id(&self, id: &str) -> Resolution<SlugResult> {
        let result = self.lookup.lookup_one(&Self::query("id", id)).await;
        settle(self.kind(), "id", id, result)
    }
}

/// Sports are resolved through the data service's dedicated procedure and
/// have no identifier lookup.
pub struct SportResolver {
    lookup: Arc<dyn CatalogLookup>,
}

impl SportResolver {
    pub fn new(lookup: Arc<dyn CatalogLookup>) -> Self {
        Self { lookup }
    }
}

#[async_trait]
impl EntityResolver for SportResolver {
    fn kind(&self) -> EntityKind {
        EntityKind::Sport
    }

    async fn resolve_by_slug(&self, slug: &str) -> Resolution<SlugResult> {
        let result = self.lookup.resolve_sport(slug).await;
        settle(self.kind(), "slug", slug, result)
    }
}

/// Programs in a publicly listed status. A program without a slug is
/// addressed by its id.
pub struct ProgramResolver {
    lookup: Arc<dyn CatalogLookup>,
}

impl ProgramResolver {
    pub fn new(lookup: Arc<dyn CatalogLookup>) -> Self {
        Self { lookup }
    }

    fn query(field: &'static str, value: &str) -> LookupQuery {
        LookupQuery::new(Collection::Programs)
            .with(Filter::eq(field, value))
            .with(Filter::one_of(
                "status",
                ProgramStatus::LISTED.map(ProgramStatus::as_str),
            ))
    }
}

#[async_trait]
impl EntityResolver for ProgramResolver {
    fn kind(&self) -> EntityKind {
        EntityKind::Program
    }

    async fn resolve_by_slug(&self, slug: &str) -> Resolution<SlugResult> {
        let result = self.lookup.lookup_one(&Self::query("slug", slug)).await;
        settle(self.kind(), "slug", slug, result)
    }

    async fn resolve_by_id(&self, id: &str) -> Resolution<SlugResult> {
        let result = self.lookup.lookup_one(&Self::query("id", id)).await;
        settle(self.kind(), "id", id, result)
    }
}
