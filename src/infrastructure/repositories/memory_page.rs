use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::error::map_poison;
use crate::domain::{
    errors::{DomainError, DomainResult},
    page::{NewPage, PAGES_COLLECTION, Page, PageRepository},
    slug::{Collection, RecordId, Slug, SlugIndex},
};

#[derive(Default)]
struct Store {
    next_id: i64,
    pages: BTreeMap<RecordId, Page>,
}

impl Store {
    fn slug_taken_by_other(&self, slug: &Slug, id: Option<RecordId>) -> bool {
        self.pages
            .values()
            .any(|page| &page.slug == slug && Some(page.id) != id)
    }
}

/// Process-local page store. Answers slug lookups for the `pages` collection
/// only; every other collection is empty.
#[derive(Default)]
pub struct InMemoryPageRepository {
    inner: Mutex<Store>,
}

impl InMemoryPageRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn serves(collection: &Collection) -> bool {
        collection.as_str() == PAGES_COLLECTION
    }
}

#[async_trait]
impl PageRepository for InMemoryPageRepository {
    async fn insert(&self, page: NewPage) -> DomainResult<Page> {
        let mut store = self.inner.lock().map_err(map_poison)?;
        if store.slug_taken_by_other(&page.slug, None) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        store.next_id += 1;
        let id = RecordId::new(store.next_id)?;
        let created = Page {
            id,
            title: page.title,
            slug: page.slug,
        };
        store.pages.insert(id, created.clone());
        Ok(created)
    }

    async fn update(&self, page: Page) -> DomainResult<Page> {
        let mut store = self.inner.lock().map_err(map_poison)?;
        if store.slug_taken_by_other(&page.slug, Some(page.id)) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }

        let slot = store
            .pages
            .get_mut(&page.id)
            .ok_or_else(|| DomainError::NotFound("page not found".into()))?;
        *slot = page.clone();
        Ok(page)
    }

    async fn delete(&self, id: RecordId) -> DomainResult<()> {
        let mut store = self.inner.lock().map_err(map_poison)?;
        store
            .pages
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("page not found".into()))
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Page>> {
        let store = self.inner.lock().map_err(map_poison)?;
        Ok(store.pages.values().find(|page| &page.slug == slug).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Page>> {
        let store = self.inner.lock().map_err(map_poison)?;
        Ok(store.pages.values().cloned().collect())
    }
}

#[async_trait]
impl SlugIndex for InMemoryPageRepository {
    async fn count_matching(&self, collection: &Collection, slug: &Slug) -> DomainResult<u64> {
        if !Self::serves(collection) {
            return Ok(0);
        }
        let store = self.inner.lock().map_err(map_poison)?;
        let count = store.pages.values().filter(|page| &page.slug == slug).count();
        u64::try_from(count).map_err(|_| DomainError::Persistence("slug count out of range".into()))
    }

    async fn get_matching(
        &self,
        collection: &Collection,
        slug: &Slug,
    ) -> DomainResult<Option<RecordId>> {
        if !Self::serves(collection) {
            return Ok(None);
        }
        let store = self.inner.lock().map_err(map_poison)?;
        Ok(store
            .pages
            .values()
            .find(|page| &page.slug == slug)
            .map(|page| page.id))
    }
}
