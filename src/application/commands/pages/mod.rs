// src/application/commands/pages/mod.rs
mod create;
mod delete;
mod rename;
mod service;

pub use create::CreatePageCommand;
pub use delete::DeletePageCommand;
pub use rename::RenamePageCommand;
pub use service::PageCommandService;
