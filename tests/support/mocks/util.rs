// tests/support/mocks/util.rs
use web_sugar::application::ports::util::SlugGenerator;

/// Uses the input as the slug, lowercased.
#[derive(Clone)]
pub struct DummySlug;

impl SlugGenerator for DummySlug {
    fn slugify(&self, s: &str) -> String {
        s.to_lowercase()
    }
}

/// Normalizes everything away.
#[derive(Clone)]
pub struct EmptySlug;

impl SlugGenerator for EmptySlug {
    fn slugify(&self, _s: &str) -> String {
        String::new()
    }
}
