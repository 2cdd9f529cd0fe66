// src/application/ports/util.rs
/// Transliterates free text into a lowercase, hyphenated, ASCII slug.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
