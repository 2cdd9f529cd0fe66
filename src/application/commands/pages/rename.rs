use super::PageCommandService;
use crate::{
    application::{
        dto::PageDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::{page::PageTitle, slug::Slug},
};

pub struct RenamePageCommand {
    pub slug: String,
    pub title: String,
}

impl PageCommandService {
    /// Retitle a page. The slug is resolved again with the page itself as
    /// target, so a title that normalizes to the current slug keeps it.
    pub async fn rename_page(&self, command: RenamePageCommand) -> ApplicationResult<PageDto> {
        let current = Slug::new(command.slug)?;
        let title = PageTitle::new(command.title)?;

        let mut page = self
            .repo
            .find_by_slug(&current)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        let collection = Self::collection()?;
        let slug = self
            .slug_resolver
            .resolve_slug(title.as_str(), &collection, Some(page.id))
            .await?;

        page.rename(title, slug);
        let updated = self.repo.update(page).await?;
        Ok(updated.into())
    }
}
