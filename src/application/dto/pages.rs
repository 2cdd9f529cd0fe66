use crate::domain::page::Page;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageDto {
    pub id: i64,
    pub title: String,
    pub slug: String,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id.into(),
            title: page.title.as_str().to_string(),
            slug: page.slug.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugPreviewDto {
    pub collection: String,
    pub slug: String,
}
