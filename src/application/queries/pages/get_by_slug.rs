use super::PageQueryService;
use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::slug::Slug,
};

pub struct GetPageBySlugQuery {
    pub slug: String,
}

impl PageQueryService {
    pub async fn get_page_by_slug(&self, query: GetPageBySlugQuery) -> ApplicationResult<PageDto> {
        let slug = Slug::new(query.slug)?;
        self.repo
            .find_by_slug(&slug)
            .await?
            .map(PageDto::from)
            .ok_or_else(|| ApplicationError::not_found("page not found"))
    }
}
