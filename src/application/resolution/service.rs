// src/application/resolution/service.rs
use super::{
    outcome::Resolution,
    resolvers::{EntityResolver, ProgramResolver, SportResolver, TrainerResolver},
};
use crate::domain::catalog::{CatalogLookup, EntityKind, SlugResult, canonical_uuid};
use std::sync::Arc;

#[derive(Clone, Copy)]
enum LookupBy {
    Slug,
    Id,
}

/// Resolves URL tokens to trainers, sports or programs.
///
/// Resolution order is data: `slug_chain` and `id_chain` are walked front
/// to back and the first hit wins. Entity namespaces are independent, so a
/// token that is a valid slug in two namespaces resolves to whichever kind
/// comes first.
pub struct SlugResolutionService {
    slug_chain: Vec<Arc<dyn EntityResolver>>,
    id_chain: Vec<Arc<dyn EntityResolver>>,
}

impl SlugResolutionService {
    /// Default chains: slugs trainer > sport > program, ids trainer > program.
    pub fn new(lookup: Arc<dyn CatalogLookup>) -> Self {
        let trainer: Arc<dyn EntityResolver> = Arc::new(TrainerResolver::new(Arc::clone(&lookup)));
        let sport: Arc<dyn EntityResolver> = Arc::new(SportResolver::new(Arc::clone(&lookup)));
        let program: Arc<dyn EntityResolver> = Arc::new(ProgramResolver::new(lookup));

        Self::with_chains(
            vec![Arc::clone(&trainer), sport, Arc::clone(&program)],
            vec![trainer, program],
        )
    }

    pub fn with_chains(
        slug_chain: Vec<Arc<dyn EntityResolver>>,
        id_chain: Vec<Arc<dyn EntityResolver>>,
    ) -> Self {
        Self {
            slug_chain,
            id_chain,
        }
    }

    pub fn slug_priority(&self) -> Vec<EntityKind> {
        self.slug_chain.iter().map(|r| r.kind()).collect()
    }

    pub fn id_priority(&self) -> Vec<EntityKind> {
        self.id_chain.iter().map(|r| r.kind()).collect()
    }

    pub async fn resolve_slug(&self, token: &str) -> Option<SlugResult> {
        self.resolve_slug_outcome(token).await.into_option()
    }

    pub async fn resolve_slug_outcome(&self, token: &str) -> Resolution<SlugResult> {
        first_match(&self.slug_chain, token, LookupBy::Slug).await
    }

    pub async fn resolve_by_slug_or_id(&self, token: &str) -> Option<SlugResult> {
        self.resolve_by_slug_or_id_outcome(token).await.into_option()
    }

    /// UUID-shaped tokens try the id chain first, in lowercase form; anything
    /// else, or an id miss, goes through slug resolution.
    pub async fn resolve_by_slug_or_id_outcome(&self, token: &str) -> Resolution<SlugResult> {
        let Some(id) = canonical_uuid(token) else {
            return self.resolve_slug_outcome(token).await;
        };

        let by_id = first_match(&self.id_chain, &id, LookupBy::Id).await;
        if by_id.is_found() {
            return by_id;
        }
        by_id.or_miss(self.resolve_slug_outcome(token).await)
    }

    pub async fn resolve_as(&self, kind: EntityKind, token: &str) -> Option<SlugResult> {
        self.resolve_as_outcome(kind, token).await.into_option()
    }

    /// Resolves `token` within a single namespace, as a typed page such as
    /// `/trainers/{token}` does.
    pub async fn resolve_as_outcome(&self, kind: EntityKind, token: &str) -> Resolution<SlugResult> {
        let Some(resolver) = self.slug_chain.iter().find(|r| r.kind() == kind) else {
            return Resolution::NotFound;
        };

        let Some(id) = canonical_uuid(token) else {
            return resolver.resolve_by_slug(token).await;
        };

        let by_id = resolver.resolve_by_id(&id).await;
        if by_id.is_found() {
            return by_id;
        }
        by_id.or_miss(resolver.resolve_by_slug(token).await)
    }
}

async fn first_match(
    chain: &[Arc<dyn EntityResolver>],
    token: &str,
    by: LookupBy,
) -> Resolution<SlugResult> {
    let mut outcome = Resolution::NotFound;
    for resolver in chain {
        let attempt = match by {
            LookupBy::Slug => resolver.resolve_by_slug(token).await,
            LookupBy::Id => resolver.resolve_by_id(token).await,
        };
        if attempt.is_found() {
            return attempt;
        }
        outcome = outcome.or_miss(attempt);
    }
    outcome
}
