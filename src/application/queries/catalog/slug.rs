// src/application/queries/catalog/slug.rs
use super::CatalogQueryService;
use crate::application::{
    dto::SlugDto,
    error::{ApplicationError, ApplicationResult},
};
use crate::domain::catalog::is_valid_slug;

const MAX_SLUG_INPUT_LEN: usize = 1024;

pub struct GenerateSlugQuery {
    pub text: String,
}

impl CatalogQueryService {
    pub fn generate_slug(&self, query: GenerateSlugQuery) -> ApplicationResult<SlugDto> {
        if query.text.len() > MAX_SLUG_INPUT_LEN {
            return Err(ApplicationError::validation(format!(
                "text must be at most {MAX_SLUG_INPUT_LEN} bytes"
            )));
        }

        let slug = self.slugger.slugify(&query.text);
        let valid = is_valid_slug(&slug);
        Ok(SlugDto { slug, valid })
    }
}
