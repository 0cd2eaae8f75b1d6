// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{catalog, pages},
    middleware::rate_limit::rate_limit_layer,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub rate_limit: bool,
    /// Empty means any origin.
    pub allowed_origins: Vec<String>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            rate_limit: true,
            allowed_origins: Vec::new(),
        }
    }
}

pub fn build_router(state: HttpState) -> Router {
    build_router_with_options(state, &RouterOptions::default())
}

/// Test helper: same router with the rate limiter toggled. The limiter keys
/// on the peer address, which in-process requests do not carry.
pub fn build_router_with_rate_limiter(state: HttpState, rate_limit: bool) -> Router {
    build_router_with_options(
        state,
        &RouterOptions {
            rate_limit,
            ..RouterOptions::default()
        },
    )
}

pub fn build_router_with_options(state: HttpState, options: &RouterOptions) -> Router {
    let router = Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/resolve/{token}", get(catalog::resolve_token))
        .route("/api/v1/slugs", post(catalog::create_slug))
        .route("/trainers/{token}", get(pages::trainer_page))
        .route("/sports/{token}", get(pages::sport_page))
        .route("/programs/{token}", get(pages::program_page));

    let router = if options.rate_limit {
        router.layer(rate_limit_layer())
    } else {
        router
    };

    router
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&options.allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
