use super::PageCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::slug::Slug,
};

pub struct DeletePageCommand {
    pub slug: String,
}

impl PageCommandService {
    pub async fn delete_page(&self, command: DeletePageCommand) -> ApplicationResult<()> {
        let slug = Slug::new(command.slug)?;
        let page = self
            .repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("page not found"))?;

        self.repo.delete(page.id).await?;
        tracing::info!(id = %page.id, %slug, "page deleted");
        Ok(())
    }
}
