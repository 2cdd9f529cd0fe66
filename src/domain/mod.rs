pub mod errors;
pub mod page;
pub mod slug;
