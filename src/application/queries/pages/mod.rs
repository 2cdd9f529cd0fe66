mod get_by_slug;
mod list;
mod preview;
mod service;

pub use get_by_slug::GetPageBySlugQuery;
pub use preview::PreviewSlugQuery;
pub use service::PageQueryService;
