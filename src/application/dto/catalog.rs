// src/application/dto/catalog.rs
use crate::domain::{
    catalog::{SlugResult, generate_seo_url},
    media::{ImageChoice, ImageSource},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResolvedEntityDto {
    /// One of `trainer`, `sport`, `program`.
    pub kind: String,
    pub id: String,
    pub slug: String,
    pub canonical_url: String,
    pub image_url: String,
    pub image_is_placeholder: bool,
    #[schema(value_type = Object)]
    pub data: serde_json::Value,
}

impl ResolvedEntityDto {
    pub fn new(result: SlugResult, image: ImageChoice) -> Self {
        let canonical_url = generate_seo_url(&result);
        Self {
            kind: result.kind.as_str().to_string(),
            id: result.id.into(),
            slug: result.slug,
            canonical_url,
            image_url: image.url,
            image_is_placeholder: image.source == ImageSource::Placeholder,
            data: result.data,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugDto {
    pub slug: String,
    /// `false` when the text contained no usable characters.
    pub valid: bool,
}
