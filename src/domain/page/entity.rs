// src/domain/page/entity.rs
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{RecordId, Slug};
use std::fmt;

pub const PAGES_COLLECTION: &str = "pages";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTitle(String);

impl PageTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value.trim().to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
pub struct Page {
    pub id: RecordId,
    pub title: PageTitle,
    pub slug: Slug,
}

impl Page {
    pub fn rename(&mut self, title: PageTitle, slug: Slug) {
        self.title = title;
        self.slug = slug;
    }
}

#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: PageTitle,
    pub slug: Slug,
}
