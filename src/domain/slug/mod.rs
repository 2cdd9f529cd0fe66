pub mod repository;
pub mod services;
pub mod value_objects;

pub use repository::SlugIndex;
pub use services::SlugResolver;
pub use value_objects::{Collection, RecordId, Slug};
