use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::{Collection, RecordId, Slug};
use async_trait::async_trait;

/// Read access to the slugs already taken inside a collection.
#[async_trait]
pub trait SlugIndex: Send + Sync {
    async fn count_matching(&self, collection: &Collection, slug: &Slug) -> DomainResult<u64>;
    async fn get_matching(
        &self,
        collection: &Collection,
        slug: &Slug,
    ) -> DomainResult<Option<RecordId>>;
}
