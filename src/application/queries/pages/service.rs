use std::sync::Arc;

use crate::domain::{page::PageRepository, slug::SlugResolver};

pub struct PageQueryService {
    pub(super) repo: Arc<dyn PageRepository>,
    pub(super) slug_resolver: Arc<SlugResolver>,
}

impl PageQueryService {
    pub fn new(repo: Arc<dyn PageRepository>, slug_resolver: Arc<SlugResolver>) -> Self {
        Self {
            repo,
            slug_resolver,
        }
    }
}
