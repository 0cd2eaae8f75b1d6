// tests/support/helpers.rs
use super::mocks::{FixedClock, RecordingCatalog};
use axum::body::{self, Body};
use axum::http::Response;
use serde_json::Value;
use std::sync::Arc;
use trainer_market_core::application::ports::{time::Clock, util::SlugGenerator};
use trainer_market_core::application::services::ApplicationServices;
use trainer_market_core::domain::catalog::CatalogLookup;
use trainer_market_core::domain::media::ImageSelector;
use trainer_market_core::infrastructure::util::DefaultSlugGenerator;
use trainer_market_core::presentation::http::{routes, state::HttpState};

pub fn build_test_state(catalog: Arc<RecordingCatalog>) -> HttpState {
    let catalog: Arc<dyn CatalogLookup> = catalog;
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);

    let services = Arc::new(ApplicationServices::new(
        catalog,
        slugger,
        clock,
        ImageSelector::default(),
    ));
    HttpState { services }
}

pub fn make_test_router(catalog: Arc<RecordingCatalog>) -> axum::Router {
    routes::build_router_with_rate_limiter(build_test_state(catalog), false)
}

pub async fn json_body(resp: Response<Body>) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body should be JSON")
}
