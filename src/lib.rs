//! Small helpers for Axum applications.
//!
//! - [`domain::slug::SlugResolver`] picks a slug that is unique inside a
//!   collection (`title`, `title_2`, `title_3`, ...).
//! - [`presentation::http::views`] holds view adapters that shape handler
//!   results into HTML documents, JSON responses or confirmation pages.
//! - [`infrastructure::templates`] renders Tera templates and ships the
//!   `math_mult` / `math_div` filters.
//!
//! The `pages` service wired up in `main` uses all of them.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
