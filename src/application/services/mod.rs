// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::pages::PageCommandService,
        ports::{templates::TemplateRenderer, util::SlugGenerator},
        queries::pages::PageQueryService,
    },
    domain::{
        page::PageRepository,
        slug::{SlugIndex, SlugResolver},
    },
};

pub struct ApplicationServices {
    pub page_commands: Arc<PageCommandService>,
    pub page_queries: Arc<PageQueryService>,
    renderer: Arc<dyn TemplateRenderer>,
}

impl ApplicationServices {
    pub fn new(
        page_repo: Arc<dyn PageRepository>,
        slug_index: Arc<dyn SlugIndex>,
        slugger: Option<Arc<dyn SlugGenerator>>,
        renderer: Arc<dyn TemplateRenderer>,
    ) -> Self {
        let slug_resolver = Arc::new(SlugResolver::new(slug_index, slugger));

        let page_commands = Arc::new(PageCommandService::new(
            Arc::clone(&page_repo),
            Arc::clone(&slug_resolver),
        ));
        let page_queries = Arc::new(PageQueryService::new(
            Arc::clone(&page_repo),
            Arc::clone(&slug_resolver),
        ));

        Self {
            page_commands,
            page_queries,
            renderer,
        }
    }

    pub fn renderer(&self) -> Arc<dyn TemplateRenderer> {
        Arc::clone(&self.renderer)
    }
}
