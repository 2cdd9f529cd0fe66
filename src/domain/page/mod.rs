pub mod entity;
pub mod repository;

pub use entity::{NewPage, PAGES_COLLECTION, Page, PageTitle};
pub use repository::PageRepository;
