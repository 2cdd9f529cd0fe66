// src/application/dto/mod.rs
pub mod pages;

pub use pages::{PageDto, SlugPreviewDto};
