// src/domain/catalog/identifier.rs
use uuid::{Uuid, Variant};

/// Maximum length of a generated slug.
pub const MAX_SLUG_LEN: usize = 50;

const HYPHENATED_UUID_LEN: usize = 36;

/// Returns `true` when `token` is a hyphenated UUID with version 1..=5 and the
/// RFC 4122 variant. Braced, URN and simple (unhyphenated) forms are rejected.
pub fn is_valid_uuid(token: &str) -> bool {
    canonical_uuid(token).is_some()
}

/// Lowercase hyphenated form of a token accepted by [`is_valid_uuid`].
/// Stored ids use this form, so id lookups compare against it.
pub fn canonical_uuid(token: &str) -> Option<String> {
    if token.len() != HYPHENATED_UUID_LEN {
        return None;
    }

    Uuid::try_parse(token)
        .ok()
        .filter(|uuid| {
            (1..=5).contains(&uuid.get_version_num()) && uuid.get_variant() == Variant::RFC4122
        })
        .map(|uuid| uuid.hyphenated().to_string())
}

/// Returns `true` when `token` matches `^[a-z0-9]+(-[a-z0-9]+)*$` and fits in
/// [`MAX_SLUG_LEN`].
pub fn is_valid_slug(token: &str) -> bool {
    !token.is_empty()
        && token.len() <= MAX_SLUG_LEN
        && token
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

/// Normalises free text into a URL slug.
///
/// Only ASCII letters and digits survive; accented and other non-ASCII
/// letters are dropped rather than transliterated. Runs of whitespace,
/// underscores and hyphens become a single hyphen. The result is capped at
/// [`MAX_SLUG_LEN`] and may be empty.
pub fn create_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut slug = String::with_capacity(lowered.len().min(MAX_SLUG_LEN));
    let mut pending_separator = false;

    for ch in lowered.trim().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_separator = true;
        }
    }

    // Everything pushed is ASCII, so byte truncation is char-safe.
    slug.truncate(MAX_SLUG_LEN);
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}
