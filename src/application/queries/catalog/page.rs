// src/application/queries/catalog/page.rs
use super::CatalogQueryService;
use crate::application::{
    dto::ResolvedEntityDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::catalog::{EntityKind, canonical_redirect};

pub struct ResolvePageQuery {
    pub kind: EntityKind,
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct PageResolution {
    pub entity: ResolvedEntityDto,
    /// Set when the page was reached through a non-canonical token.
    pub redirect_to: Option<String>,
}

impl CatalogQueryService {
    pub async fn resolve_page(&self, query: ResolvePageQuery) -> ApplicationResult<PageResolution> {
        let result = self
            .resolver
            .resolve_as(query.kind, &query.token)
            .await
            .ok_or_else(|| ApplicationError::not_found(format!("{} not found", query.kind)))?;

        let redirect_to = canonical_redirect(&query.token, &result);
        Ok(PageResolution {
            entity: self.to_dto(result),
            redirect_to,
        })
    }
}
