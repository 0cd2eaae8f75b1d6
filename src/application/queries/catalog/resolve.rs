// src/application/queries/catalog/resolve.rs
use super::CatalogQueryService;
use crate::application::{
    dto::ResolvedEntityDto,
    error::{ApplicationError, ApplicationResult},
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolveMode {
    /// UUID tokens go through identifier lookup before slug lookup.
    #[default]
    SlugOrId,
    SlugOnly,
}

pub struct ResolveTokenQuery {
    pub token: String,
    pub mode: ResolveMode,
}

impl CatalogQueryService {
    pub async fn resolve_token(&self, query: ResolveTokenQuery) -> ApplicationResult<ResolvedEntityDto> {
        let outcome = match query.mode {
            ResolveMode::SlugOrId => self.resolver.resolve_by_slug_or_id_outcome(&query.token).await,
            ResolveMode::SlugOnly => self.resolver.resolve_slug_outcome(&query.token).await,
        };

        if outcome.is_upstream_error() {
            tracing::warn!(token = %query.token, "resolution degraded to not found by upstream failure");
        }

        outcome
            .into_option()
            .map(|result| self.to_dto(result))
            .ok_or_else(|| ApplicationError::not_found("no entity matches this path"))
    }
}
