// src/config.rs
use std::{env, path::PathBuf, time::Duration};
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: Option<String>,
    listen_addr: String,
    allowed_origins: Vec<String>,
    catalog_seed_path: Option<PathBuf>,
    image_expiry_skew: Duration,
    placeholder_base_url: String,
    rate_limit_enabled: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

fn default_placeholder_base_url() -> String {
    "/images/placeholders".into()
}

const DEFAULT_IMAGE_EXPIRY_SKEW_SECS: u64 = 60;
const MAX_IMAGE_EXPIRY_SKEW_SECS: u64 = 7 * 24 * 60 * 60;

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(ConfigError::Invalid(format!(
            "{key} must be a boolean, got {other:?}"
        ))),
    }
}

fn parse_skew_secs(raw: &str) -> Result<u64, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if secs <= MAX_IMAGE_EXPIRY_SKEW_SECS => Ok(secs),
        _ => Err(ConfigError::Invalid(format!(
            "IMAGE_EXPIRY_SKEW_SECONDS must be an integer between 0 and {MAX_IMAGE_EXPIRY_SKEW_SECS}, got {raw:?}"
        ))),
    }
}

impl AppConfig {
    /// Build configuration from environment variables. Without
    /// `DATABASE_URL` the service runs on the in-memory catalog.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = non_empty_var("DATABASE_URL");
        let listen_addr = non_empty_var("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

        let allowed_origins = non_empty_var("ALLOWED_ORIGINS")
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        let catalog_seed_path = non_empty_var("CATALOG_SEED_PATH").map(PathBuf::from);
        if database_url.is_some() && catalog_seed_path.is_some() {
            return Err(ConfigError::Invalid(
                "CATALOG_SEED_PATH only applies without DATABASE_URL".into(),
            ));
        }

        let image_expiry_skew_secs = match non_empty_var("IMAGE_EXPIRY_SKEW_SECONDS") {
            Some(raw) => parse_skew_secs(&raw)?,
            None => DEFAULT_IMAGE_EXPIRY_SKEW_SECS,
        };

        let placeholder_base_url =
            non_empty_var("PLACEHOLDER_BASE_URL").unwrap_or_else(default_placeholder_base_url);

        let rate_limit_enabled = non_empty_var("RATE_LIMIT_ENABLED")
            .map(|v| parse_flag("RATE_LIMIT_ENABLED", &v))
            .transpose()?
            .unwrap_or(true);

        Ok(Self {
            database_url,
            listen_addr,
            allowed_origins,
            catalog_seed_path,
            image_expiry_skew: Duration::from_secs(image_expiry_skew_secs),
            placeholder_base_url,
            rate_limit_enabled,
        })
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn catalog_seed_path(&self) -> Option<&PathBuf> {
        self.catalog_seed_path.as_ref()
    }

    pub const fn image_expiry_skew(&self) -> Duration {
        self.image_expiry_skew
    }

    pub fn placeholder_base_url(&self) -> &str {
        &self.placeholder_base_url
    }

    pub const fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }
}
