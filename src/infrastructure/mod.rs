pub mod repositories;
pub mod templates;
pub mod util;
