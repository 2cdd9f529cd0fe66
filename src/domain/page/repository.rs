use crate::domain::errors::DomainResult;
use crate::domain::page::entity::{NewPage, Page};
use crate::domain::slug::{RecordId, Slug};
use async_trait::async_trait;

#[async_trait]
pub trait PageRepository: Send + Sync {
    async fn insert(&self, page: NewPage) -> DomainResult<Page>;
    async fn update(&self, page: Page) -> DomainResult<Page>;
    async fn delete(&self, id: RecordId) -> DomainResult<()>;
    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>>;
    async fn list(&self) -> DomainResult<Vec<Page>>;
}
