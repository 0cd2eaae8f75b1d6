// src/application/ports/mod.rs
pub mod time;
pub mod util;

// Type aliases to make port injection sites more descriptive and reduce `dyn` noise
pub type ClockPort = dyn time::Clock;
pub type SlugGeneratorPort = dyn util::SlugGenerator;
pub type CatalogLookupPort = dyn crate::domain::catalog::CatalogLookup;
