// src/application/queries/catalog/service.rs
use std::sync::Arc;

use crate::application::{
    dto::ResolvedEntityDto,
    ports::{time::Clock, util::SlugGenerator},
    resolution::SlugResolutionService,
};
use crate::domain::{catalog::SlugResult, media::ImageSelector};

pub struct CatalogQueryService {
    pub(super) resolver: Arc<SlugResolutionService>,
    pub(super) slugger: Arc<dyn SlugGenerator>,
    pub(super) images: ImageSelector,
    pub(super) clock: Arc<dyn Clock>,
}

impl CatalogQueryService {
    pub fn new(
        resolver: Arc<SlugResolutionService>,
        slugger: Arc<dyn SlugGenerator>,
        images: ImageSelector,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            resolver,
            slugger,
            images,
            clock,
        }
    }

    pub(super) fn to_dto(&self, result: SlugResult) -> ResolvedEntityDto {
        let image = self.images.select_for(&result, self.clock.now());
        ResolvedEntityDto::new(result, image)
    }
}
