// src/presentation/http/controllers/pages.rs
use crate::application::queries::catalog::ResolvePageQuery;
use crate::domain::catalog::EntityKind;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::Path,
    response::{IntoResponse, Redirect, Response},
};

/// Serves the entity when reached by its canonical slug and redirects
/// permanently to the canonical URL otherwise.
async fn serve_page(state: &HttpState, kind: EntityKind, token: String) -> HttpResult<Response> {
    let page = state
        .services
        .catalog_queries
        .resolve_page(ResolvePageQuery { kind, token })
        .await
        .into_http()?;

    Ok(match page.redirect_to {
        Some(location) => {
            tracing::debug!(%kind, %location, "redirecting to canonical url");
            Redirect::permanent(&location).into_response()
        }
        None => Json(page.entity).into_response(),
    })
}

#[utoipa::path(
    get,
    path = "/trainers/{token}",
    params(("token" = String, Path, description = "Trainer slug or id")),
    responses(
        (status = 200, description = "Trainer reached by canonical slug.", body = crate::application::dto::ResolvedEntityDto),
        (status = 308, description = "Redirect to the canonical trainer URL."),
        (status = 404, description = "No such trainer.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn trainer_page(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
) -> HttpResult<Response> {
    serve_page(&state, EntityKind::Trainer, token).await
}

#[utoipa::path(
    get,
    path = "/sports/{token}",
    params(("token" = String, Path, description = "Sport slug")),
    responses(
        (status = 200, description = "Sport reached by canonical slug.", body = crate::application::dto::ResolvedEntityDto),
        (status = 308, description = "Redirect to the canonical sport URL."),
        (status = 404, description = "No such sport.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn sport_page(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
) -> HttpResult<Response> {
    serve_page(&state, EntityKind::Sport, token).await
}

#[utoipa::path(
    get,
    path = "/programs/{token}",
    params(("token" = String, Path, description = "Program slug or id")),
    responses(
        (status = 200, description = "Program reached by canonical slug.", body = crate::application::dto::ResolvedEntityDto),
        (status = 308, description = "Redirect to the canonical program URL."),
        (status = 404, description = "No such program.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Pages"
)]
pub async fn program_page(
    Extension(state): Extension<HttpState>,
    Path(token): Path<String>,
) -> HttpResult<Response> {
    serve_page(&state, EntityKind::Program, token).await
}
