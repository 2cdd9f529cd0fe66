// src/application/ports/mod.rs
pub mod templates;
pub mod util;
