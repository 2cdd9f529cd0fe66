// src/application/commands/pages/service.rs
use std::sync::Arc;

use crate::domain::{
    errors::DomainResult,
    page::{PAGES_COLLECTION, PageRepository},
    slug::{Collection, SlugResolver},
};

pub struct PageCommandService {
    pub(super) repo: Arc<dyn PageRepository>,
    pub(super) slug_resolver: Arc<SlugResolver>,
}

impl PageCommandService {
    pub fn new(repo: Arc<dyn PageRepository>, slug_resolver: Arc<SlugResolver>) -> Self {
        Self {
            repo,
            slug_resolver,
        }
    }

    pub(super) fn collection() -> DomainResult<Collection> {
        Collection::new(PAGES_COLLECTION)
    }
}
