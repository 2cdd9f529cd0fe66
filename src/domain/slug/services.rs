// src/domain/slug/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::repository::SlugIndex;
use crate::domain::slug::value_objects::{Collection, RecordId, Slug};

/// Domain service producing slugs that are unique inside a collection.
///
/// Without a generator every resolution fails with
/// [`DomainError::NormalizationUnavailable`].
pub struct SlugResolver {
    index: Arc<dyn SlugIndex>,
    generator: Option<Arc<dyn SlugGenerator>>,
}

impl SlugResolver {
    pub fn new(index: Arc<dyn SlugIndex>, generator: Option<Arc<dyn SlugGenerator>>) -> Self {
        Self { index, generator }
    }

    pub fn normalize(&self, value: &str) -> DomainResult<Slug> {
        let generator = self
            .generator
            .as_ref()
            .ok_or(DomainError::NormalizationUnavailable)?;
        let normalized = generator.slugify(value);
        if normalized.is_empty() {
            return Err(DomainError::Validation(format!(
                "'{value}' does not produce a usable slug"
            )));
        }
        Slug::new(normalized)
    }

    /// Resolve the slug `value` should get inside `collection`.
    ///
    /// `target` is the record the slug is for; `None` for a record that has
    /// not been stored yet. A target that already owns the base slug keeps
    /// it, everybody else gets the first free `base_N` with `N >= 2`.
    /// Nothing is persisted here.
    pub async fn resolve_slug(
        &self,
        value: &str,
        collection: &Collection,
        target: Option<RecordId>,
    ) -> DomainResult<Slug> {
        let base = self.normalize(value)?;
        let count = self.index.count_matching(collection, &base).await?;

        if count == 1 && target.is_some() {
            let owner = self.index.get_matching(collection, &base).await?;
            if owner == target {
                return Ok(base);
            }
        }

        if count == 0 {
            return Ok(base);
        }

        tracing::debug!(%collection, slug = %base, count, "slug taken, searching for a free suffix");
        let mut suffix = 2u64;
        loop {
            let candidate = base.with_suffix(suffix);
            if self.index.count_matching(collection, &candidate).await? == 0 {
                return Ok(candidate);
            }
            suffix += 1;
        }
    }
}
