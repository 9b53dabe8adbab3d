// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// Normalise a display name into a URL-safe base slug. May return an
    /// empty string when nothing usable is left.
    fn slugify(&self, input: &str) -> String;
}
