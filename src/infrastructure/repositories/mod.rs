// src/infrastructure/repositories/mod.rs
mod error;
mod memory_catalog;
mod postgres_catalog;

pub use error::map_sqlx;
pub use memory_catalog::InMemoryCatalog;
pub use postgres_catalog::PostgresCatalogLookup;
