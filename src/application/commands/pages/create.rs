use super::PageCommandService;
use crate::{
    application::{dto::PageDto, error::ApplicationResult},
    domain::page::{NewPage, PageTitle},
};

pub struct CreatePageCommand {
    pub title: String,
}

impl PageCommandService {
    pub async fn create_page(&self, command: CreatePageCommand) -> ApplicationResult<PageDto> {
        let title = PageTitle::new(command.title)?;
        let collection = Self::collection()?;
        let slug = self
            .slug_resolver
            .resolve_slug(title.as_str(), &collection, None)
            .await?;

        let created = self.repo.insert(NewPage { title, slug }).await?;
        tracing::info!(id = %created.id, slug = %created.slug, "page created");
        Ok(created.into())
    }
}
