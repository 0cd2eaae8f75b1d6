// src/main.rs
use trainer_market_core::application::{
    ports::{time::Clock, util::SlugGenerator},
    services::ApplicationServices,
};
use trainer_market_core::config::AppConfig;
use trainer_market_core::domain::{catalog::CatalogLookup, media::ImageSelector};
use trainer_market_core::infrastructure::{
    database,
    repositories::{InMemoryCatalog, PostgresCatalogLookup},
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use trainer_market_core::presentation::http::{
    routes::{RouterOptions, build_router_with_options},
    state::HttpState,
};
use anyhow::{Context, Result};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err:#}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;
    let catalog = init_catalog(&config).await?;

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let skew = chrono::Duration::from_std(config.image_expiry_skew())
        .context("IMAGE_EXPIRY_SKEW_SECONDS out of range")?;
    let images = ImageSelector::new(config.placeholder_base_url(), skew);

    let services = Arc::new(ApplicationServices::new(catalog, slugger, clock, images));
    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router_with_options(
        state,
        &RouterOptions {
            rate_limit: config.rate_limit_enabled(),
            allowed_origins: config.allowed_origins().to_vec(),
        },
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

async fn init_catalog(config: &AppConfig) -> Result<Arc<dyn CatalogLookup>> {
    if let Some(database_url) = config.database_url() {
        let pool = database::init_pool(database_url).await?;
        database::run_migrations(&pool).await?;
        tracing::info!("using postgres catalog");
        return Ok(Arc::new(PostgresCatalogLookup::new(pool)));
    }

    let catalog = match config.catalog_seed_path() {
        Some(path) => {
            tracing::info!(path = %path.display(), "using in-memory catalog from seed");
            InMemoryCatalog::load(path)?
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using an empty in-memory catalog");
            InMemoryCatalog::new()
        }
    };
    Ok(Arc::new(catalog))
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
