// src/domain/media/selector.rs
use super::signed_url::signed_url_expiry;
use crate::domain::catalog::{EntityKind, SlugResult};
use chrono::{DateTime, Duration, Utc};

pub const DEFAULT_PLACEHOLDER_BASE: &str = "/images/placeholders";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    /// Index into the candidate list.
    Candidate(usize),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageChoice {
    pub url: String,
    pub source: ImageSource,
}

/// Picks a displayable image URL, skipping blanks, malformed values and
/// signed URLs that expire within the skew window.
#[derive(Debug, Clone)]
pub struct ImageSelector {
    placeholder_base: String,
    expiry_skew: Duration,
}

impl Default for ImageSelector {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_BASE, Duration::seconds(60))
    }
}

impl ImageSelector {
    pub fn new(placeholder_base: impl Into<String>, expiry_skew: Duration) -> Self {
        Self {
            placeholder_base: placeholder_base.into(),
            expiry_skew,
        }
    }

    pub fn placeholder(&self, kind: EntityKind) -> String {
        format!("{}/{kind}.svg", self.placeholder_base.trim_end_matches('/'))
    }

    pub fn is_usable(&self, url: &str, now: DateTime<Utc>) -> bool {
        let url = url.trim();
        let well_formed = url.starts_with("https://")
            || url.starts_with("http://")
            || (url.starts_with('/') && !url.starts_with("//"));
        if !well_formed {
            return false;
        }

        match signed_url_expiry(url) {
            // A skew past the representable range leaves no usable window.
            Some(expires_at) => now
                .checked_add_signed(self.expiry_skew)
                .is_some_and(|deadline| expires_at > deadline),
            None => true,
        }
    }

    pub fn select<'a, I>(&self, candidates: I, kind: EntityKind, now: DateTime<Utc>) -> ImageChoice
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        for (index, candidate) in candidates.into_iter().enumerate() {
            let Some(url) = candidate.map(str::trim).filter(|url| !url.is_empty()) else {
                continue;
            };
            if self.is_usable(url, now) {
                return ImageChoice {
                    url: url.to_string(),
                    source: ImageSource::Candidate(index),
                };
            }
            tracing::debug!(%kind, index, "skipping unusable image url");
        }

        ImageChoice {
            url: self.placeholder(kind),
            source: ImageSource::Placeholder,
        }
    }

    /// Selects among the payload fields the entity kind stores images in.
    pub fn select_for(&self, result: &SlugResult, now: DateTime<Utc>) -> ImageChoice {
        let candidates = result
            .kind
            .image_fields()
            .iter()
            .map(|field| result.data_str(field));
        self.select(candidates, result.kind, now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::EntityId;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn picks_first_usable_candidate() {
        let selector = ImageSelector::default();
        let choice = selector.select(
            [None, Some("  "), Some("https://cdn.example.com/b.jpg")],
            EntityKind::Trainer,
            now(),
        );
        assert_eq!(choice.url, "https://cdn.example.com/b.jpg");
        assert_eq!(choice.source, ImageSource::Candidate(2));
    }

    #[test]
    fn skips_expired_and_nearly_expired_signed_urls() {
        let selector = ImageSelector::default();
        let expired = "https://cdn.example.com/a.jpg?Expires=1699999999";
        let nearly = "https://cdn.example.com/a.jpg?Expires=1700000030";
        let fresh = "https://cdn.example.com/c.jpg?Expires=1700003600";
        let choice = selector.select(
            [Some(expired), Some(nearly), Some(fresh)],
            EntityKind::Program,
            now(),
        );
        assert_eq!(choice.url, fresh);
        assert_eq!(choice.source, ImageSource::Candidate(2));
    }

    #[test]
    fn oversized_skew_rejects_signed_urls_without_panicking() {
        let skew = Duration::from_std(std::time::Duration::from_secs(9_000_000_000_000_000)).unwrap();
        let selector = ImageSelector::new("/p", skew);
        let choice = selector.select(
            [Some("https://x.example.com/a.jpg?Expires=1800000000"), Some("/uploads/a.png")],
            EntityKind::Trainer,
            now(),
        );
        assert_eq!(choice.url, "/uploads/a.png");
        assert_eq!(choice.source, ImageSource::Candidate(1));
    }

    #[test]
    fn falls_back_to_kind_placeholder() {
        let selector = ImageSelector::new("https://static.example.com/ph/", Duration::zero());
        let choice = selector.select([Some("javascript:alert(1)"), Some("//evil")], EntityKind::Sport, now());
        assert_eq!(choice.url, "https://static.example.com/ph/sport.svg");
        assert_eq!(choice.source, ImageSource::Placeholder);
    }

    #[test]
    fn reads_image_fields_from_payload() {
        let result = SlugResult {
            kind: EntityKind::Program,
            id: EntityId::new("p1").unwrap(),
            slug: "p1".into(),
            data: json!({ "cover_image_url": "", "image_url": "/uploads/p1.png" }),
        };
        let choice = ImageSelector::default().select_for(&result, now());
        assert_eq!(choice.url, "/uploads/p1.png");
        assert_eq!(choice.source, ImageSource::Candidate(1));
    }
}
