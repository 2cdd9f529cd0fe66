use super::PageQueryService;
use crate::{
    application::{dto::SlugPreviewDto, error::ApplicationResult},
    domain::slug::{Collection, RecordId},
};

/// Ask which slug `value` would get, without storing anything.
pub struct PreviewSlugQuery {
    pub value: String,
    pub collection: String,
    pub record_id: Option<i64>,
}

impl PageQueryService {
    pub async fn preview_slug(&self, query: PreviewSlugQuery) -> ApplicationResult<SlugPreviewDto> {
        let collection = Collection::new(query.collection)?;
        let target = query.record_id.map(RecordId::new).transpose()?;
        let slug = self
            .slug_resolver
            .resolve_slug(&query.value, &collection, target)
            .await?;

        Ok(SlugPreviewDto {
            collection: collection.to_string(),
            slug: slug.into(),
        })
    }
}
