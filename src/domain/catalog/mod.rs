// src/domain/catalog/mod.rs
pub mod entity;
pub mod identifier;
pub mod repository;
pub mod seo;
pub mod value_objects;

pub use entity::{CatalogRecord, SlugResult};
pub use identifier::{MAX_SLUG_LEN, canonical_uuid, create_slug, is_valid_slug, is_valid_uuid};
pub use repository::{CatalogLookup, Collection, Filter, FilterValue, LookupQuery};
pub use seo::{canonical_redirect, generate_seo_url, seo_url_for};
pub use value_objects::{EntityId, EntityKind, ProgramStatus};
