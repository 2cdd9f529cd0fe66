// src/application/ports/templates.rs
use crate::application::error::ApplicationResult;
use serde_json::{Map, Value};

/// Template variables handed to a renderer.
pub type Context = Map<String, Value>;

pub trait TemplateRenderer: Send + Sync {
    /// Render `template` with `context`. Unknown templates and render
    /// failures come back as [`ApplicationError::Template`](crate::application::error::ApplicationError::Template).
    fn render_to_string(&self, template: &str, context: &Context) -> ApplicationResult<String>;
}
