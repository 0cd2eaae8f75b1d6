// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ports::{CatalogLookupPort, ClockPort, SlugGeneratorPort},
        queries::catalog::CatalogQueryService,
        resolution::SlugResolutionService,
    },
    domain::media::ImageSelector,
};

pub struct ApplicationServices {
    pub catalog_queries: Arc<CatalogQueryService>,
}

impl ApplicationServices {
    pub fn new(
        catalog: Arc<CatalogLookupPort>,
        slugger: Arc<SlugGeneratorPort>,
        clock: Arc<ClockPort>,
        images: ImageSelector,
    ) -> Self {
        let resolver = Arc::new(SlugResolutionService::new(catalog));
        let catalog_queries = Arc::new(CatalogQueryService::new(resolver, slugger, images, clock));

        Self { catalog_queries }
    }
}
