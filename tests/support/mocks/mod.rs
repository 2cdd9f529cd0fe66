// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod renderer;
pub mod slug_index;
pub mod util;

pub use renderer::{FailingRenderer, RecordingRenderer};
pub use slug_index::MemorySlugIndex;
pub use util::{DummySlug, EmptySlug};
