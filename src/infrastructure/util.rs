use crate::application::ports::util::SlugGenerator;
use slug::slugify;

/// Slug generator backed by the `slug` crate (transliterates through `deunicode`).
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}
