// src/domain/media/signed_url.rs
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::Deserialize;

const AMZ_DATE_FORMAT: &str = "%Y%m%dT%H%M%SZ";

#[derive(Deserialize)]
struct TokenClaims {
    exp: Option<i64>,
}

/// Extracts the expiry instant encoded in a signed URL's query string.
///
/// Recognised forms:
/// - `Expires=<unix seconds>`
/// - `X-Amz-Date=<YYYYMMDDTHHMMSSZ>` with `X-Amz-Expires=<seconds>` (and the
///   `X-Goog-*` equivalents)
/// - `token=<JWT>` carrying an `exp` claim
///
/// Returns `None` for unsigned URLs or when the parameters do not parse.
pub fn signed_url_expiry(url: &str) -> Option<DateTime<Utc>> {
    let (_, query) = url.split_once('?')?;
    let query = query.split_once('#').map_or(query, |(query, _)| query);
    let params: Vec<(String, String)> = serde_urlencoded::from_str(query).ok()?;

    let param = |name: &str| {
        params
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    };

    if let Some(expires) = param("Expires") {
        return expires
            .parse::<i64>()
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0));
    }

    for (date_key, ttl_key) in [
        ("X-Amz-Date", "X-Amz-Expires"),
        ("X-Goog-Date", "X-Goog-Expires"),
    ] {
        if let (Some(date), Some(ttl)) = (param(date_key), param(ttl_key)) {
            return dated_expiry(date, ttl);
        }
    }

    param("token").and_then(token_expiry)
}

fn dated_expiry(date: &str, ttl: &str) -> Option<DateTime<Utc>> {
    let signed_at = NaiveDateTime::parse_from_str(date, AMZ_DATE_FORMAT)
        .ok()?
        .and_utc();
    let ttl = ttl.parse::<i64>().ok()?;
    signed_at.checked_add_signed(Duration::try_seconds(ttl)?)
}

fn token_expiry(token: &str) -> Option<DateTime<Utc>> {
    let payload = token.split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .ok()?;
    let claims: TokenClaims = serde_json::from_slice(&bytes).ok()?;
    DateTime::from_timestamp(claims.exp?, 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jwt_with(claims: &str) -> String {
        format!(
            "{}.{}.sig",
            URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
            URL_SAFE_NO_PAD.encode(claims)
        )
    }

    #[test]
    fn unsigned_urls_have_no_expiry() {
        assert_eq!(signed_url_expiry("https://cdn.example.com/a.jpg"), None);
        assert_eq!(signed_url_expiry("https://cdn.example.com/a.jpg?w=200"), None);
    }

    #[test]
    fn reads_expires_parameter() {
        let expiry = signed_url_expiry("https://cdn.example.com/a.jpg?Expires=1700000000&Signature=x");
        assert_eq!(expiry.map(|t| t.timestamp()), Some(1_700_000_000));
    }

    #[test]
    fn reads_amz_date_plus_ttl() {
        let url = "https://bucket.s3.amazonaws.com/a.jpg?X-Amz-Algorithm=AWS4-HMAC-SHA256&X-Amz-Date=20240101T000000Z&X-Amz-Expires=3600&X-Amz-Signature=abc";
        let expiry = signed_url_expiry(url).unwrap();
        assert_eq!(expiry.to_rfc3339(), "2024-01-01T01:00:00+00:00");
    }

    #[test]
    fn reads_token_exp_claim() {
        let token = jwt_with(r#"{"url":"avatars/a.jpg","exp":1704067200}"#);
        let url = format!("https://x.storage.example.com/object/sign/avatars/a.jpg?token={token}");
        assert_eq!(
            signed_url_expiry(&url).map(|t| t.timestamp()),
            Some(1_704_067_200)
        );
    }

    #[test]
    fn garbage_token_is_ignored() {
        let url = "https://x.example.com/a.jpg?token=not-a-jwt";
        assert_eq!(signed_url_expiry(url), None);
    }
}
