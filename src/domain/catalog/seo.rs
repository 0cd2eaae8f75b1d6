// src/domain/catalog/seo.rs
use super::{entity::SlugResult, value_objects::EntityKind};

/// Canonical page path for a resolved entity.
pub fn generate_seo_url(result: &SlugResult) -> String {
    canonical_path(result.kind, &result.slug)
}

/// Same mapping for a raw kind string coming from an external payload.
/// Unknown kinds map to the site root.
pub fn seo_url_for(kind: &str, slug: &str) -> String {
    kind.parse::<EntityKind>()
        .map_or_else(|_| "/".to_string(), |kind| canonical_path(kind, slug))
}

/// Returns the canonical URL when `requested_token` is not the canonical
/// slug, e.g. a page reached through a bare identifier.
pub fn canonical_redirect(requested_token: &str, result: &SlugResult) -> Option<String> {
    if result.slug.is_empty() || requested_token == result.slug {
        None
    } else {
        Some(generate_seo_url(result))
    }
}

fn canonical_path(kind: EntityKind, slug: &str) -> String {
    format!("{}/{slug}", kind.path_prefix())
}
