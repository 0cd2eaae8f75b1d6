// src/presentation/http/controllers/catalog.rs
use crate::application::{
    dto::{ResolvedEntityDto, SlugDto},
    queries::catalog::{GenerateSlugQuery, ResolveMode, ResolveTokenQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, Default, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResolveModeParam {
    /// Identifier lookup for UUID tokens, then slug lookup.
    #[default]
    Auto,
    /// Slug lookup only.
    Slug,
}

impl From<ResolveModeParam> for ResolveMode {
    fn from(value: ResolveModeParam) -> Self {
        match value {
            ResolveModeParam::Auto => Self::SlugOrId,
            ResolveModeParam::Slug => Self::SlugOnly,
        }
    }
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveParams {
    #[serde(default)]
    pub mode: ResolveModeParam,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSlugRequest {
    pub text: String,
}

#[utoipa::path(
    get,
    path = "/api/v1/resolve/{token}",
    params(
        ("token" = String, Path, description = "Slug or UUID taken from a URL path segment"),
        ResolveParams
    ),
    responses(
        (status = 200, description = "Entity the token resolves to.", body = ResolvedEntityDto),
        (status = 404, description = "No trainer, sport or program matches.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Resolution"
)]
pub async fn resolve_token(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
    Query(params): Query<ResolveParams>,
) -> HttpResult<Json<ResolvedEntityDto>> {
    state
        .services
        .catalog_queries
        .resolve_token(ResolveTokenQuery {
            token,
            mode: params.mode.into(),
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/slugs",
    request_body = CreateSlugRequest,
    responses(
        (status = 200, description = "Slug generated from the text.", body = SlugDto),
        (status = 400, description = "Text too long.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Resolution"
)]
pub async fn create_slug(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateSlugRequest>,
) -> HttpResult<Json<SlugDto>> {
    state
        .services
        .catalog_queries
        .generate_slug(GenerateSlugQuery { text: payload.text })
        .into_http()
        .map(Json)
}
