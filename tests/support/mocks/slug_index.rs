// tests/support/mocks/slug_index.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use web_sugar::domain::errors::DomainResult;
use web_sugar::domain::slug::{Collection, RecordId, Slug, SlugIndex};

/// Slug index backed by a map of `(collection, slug) -> owners`. Duplicate
/// owners are allowed so tests can model inconsistent data.
#[derive(Default)]
pub struct MemorySlugIndex {
    entries: Mutex<HashMap<(String, String), Vec<RecordId>>>,
    lookups: Mutex<Vec<String>>,
}

impl MemorySlugIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, collection: &str, slug: &str, id: i64) {
        self.entries
            .lock()
            .unwrap()
            .entry((collection.to_string(), slug.to_string()))
            .or_default()
            .push(RecordId(id));
    }

    /// Every slug `count_matching` was asked about, in order.
    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugIndex for MemorySlugIndex {
    async fn count_matching(&self, collection: &Collection, slug: &Slug) -> DomainResult<u64> {
        self.lookups.lock().unwrap().push(slug.to_string());
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .get(&(collection.to_string(), slug.to_string()))
            .map_or(0, |owners| u64::try_from(owners.len()).unwrap()))
    }

    async fn get_matching(
        &self,
        collection: &Collection,
        slug: &Slug,
    ) -> DomainResult<Option<RecordId>> {
        let entries = self.entries.lock().unwrap();
        Ok(entries
            .get(&(collection.to_string(), slug.to_string()))
            .and_then(|owners| owners.first().copied()))
    }
}
