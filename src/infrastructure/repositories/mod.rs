// src/infrastructure/repositories/mod.rs
mod error;
mod memory_page;

pub use memory_page::InMemoryPageRepository;
