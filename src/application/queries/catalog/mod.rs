// src/application/queries/catalog/mod.rs
mod page;
mod resolve;
mod service;
mod slug;

pub use page::{PageResolution, ResolvePageQuery};
pub use resolve::{ResolveMode, ResolveTokenQuery};
pub use service::CatalogQueryService;
pub use slug::GenerateSlugQuery;
