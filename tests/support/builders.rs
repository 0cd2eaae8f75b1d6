// tests/support/builders.rs
use serde_json::{Value, json};

pub const ANA_ID: &str = "3f2504e0-4f89-41d3-9a0c-0305e82c3301";
pub const HIIT_ID: &str = "6ba7b810-9dad-41d1-80b4-00c04fd430c8";

pub fn trainer(id: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "role": "trainer",
        "is_active": true,
        "full_name": "Ana Costa",
    })
}

pub fn sport(id: &str, slug: &str) -> Value {
    json!({ "id": id, "slug": slug, "name": slug })
}

pub fn program(id: &str, slug: Option<&str>, status: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "status": status,
        "title": "Program",
    })
}
