use super::PageQueryService;
use crate::application::{dto::PageDto, error::ApplicationResult};

impl PageQueryService {
    pub async fn list_pages(&self) -> ApplicationResult<Vec<PageDto>> {
        let pages = self.repo.list().await?;
        Ok(pages.into_iter().map(PageDto::from).collect())
    }
}
