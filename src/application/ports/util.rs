// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Normalises free text into a URL slug. May return an empty string.
    fn slugify(&self, input: &str) -> String;
}
