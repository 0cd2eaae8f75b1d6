// src/presentation/http/openapi.rs
use axum::{Router, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::catalog::resolve_token,
        crate::presentation::http::controllers::catalog::create_slug,
        crate::presentation::http::controllers::pages::trainer_page,
        crate::presentation::http::controllers::pages::sport_page,
        crate::presentation::http::controllers::pages::program_page,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::catalog::CreateSlugRequest,
            crate::presentation::http::controllers::catalog::ResolveModeParam,
            crate::application::dto::ResolvedEntityDto,
            crate::application::dto::SlugDto
        )
    ),
    tags(
        (name = "Resolution", description = "Slug and identifier resolution"),
        (name = "Pages", description = "Canonical entity pages with redirects"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ServerList),
    info(
        title = "Trainer Marketplace Resolution API",
        description = "Resolves URL tokens to trainers, sports and programs",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ServerList;

impl Modify for ServerList {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let urls = env::var("PUBLIC_API_URLS").unwrap_or_else(|_| "http://localhost:8080".into());
        for url in urls
            .split(',')
            .map(|segment| segment.trim().trim_end_matches('/'))
            .filter(|segment| !segment.is_empty())
        {
            if !servers.iter().any(|server| server.url == url) {
                servers.push(Server::new(url));
            }
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn docs_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(serve_openapi))
}

pub fn write_openapi_snapshot() -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
