// src/domain/media/mod.rs
pub mod selector;
pub mod signed_url;

pub use selector::{ImageChoice, ImageSelector, ImageSource};
pub use signed_url::signed_url_expiry;
