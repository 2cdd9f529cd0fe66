// src/infrastructure/templates/mod.rs
mod filters;

use std::error::Error as _;
use std::path::Path;

use serde_json::Value;
use tera::Tera;

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::templates::{Context, TemplateRenderer},
};

pub use filters::{math_div, math_mult};

/// Tera-backed renderer with the math filters registered.
pub struct TeraRenderer {
    tera: Tera,
}

impl TeraRenderer {
    /// Load every template below `dir`. Template names are paths relative to it.
    pub fn from_dir(dir: impl AsRef<Path>) -> ApplicationResult<Self> {
        let glob = format!("{}/**/*", dir.as_ref().display());
        let tera = Tera::new(&glob).map_err(map_tera)?;
        tracing::info!(
            templates = tera.get_template_names().count(),
            dir = %dir.as_ref().display(),
            "templates loaded"
        );
        Ok(Self::with_filters(tera))
    }

    /// Build from `(name, source)` pairs, mostly for tests and embedded templates.
    pub fn from_raw<I, N, C>(templates: I) -> ApplicationResult<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: AsRef<str>,
        C: AsRef<str>,
    {
        let mut tera = Tera::default();
        tera.add_raw_templates(templates).map_err(map_tera)?;
        Ok(Self::with_filters(tera))
    }

    fn with_filters(mut tera: Tera) -> Self {
        tera.register_filter("math_mult", math_mult);
        tera.register_filter("math_div", math_div);
        Self { tera }
    }
}

impl TemplateRenderer for TeraRenderer {
    fn render_to_string(&self, template: &str, context: &Context) -> ApplicationResult<String> {
        let context =
            tera::Context::from_value(Value::Object(context.clone())).map_err(map_tera)?;
        self.tera.render(template, &context).map_err(map_tera)
    }
}

fn map_tera(err: tera::Error) -> ApplicationError {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    ApplicationError::template(message)
}
