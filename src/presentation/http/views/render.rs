use std::sync::Arc;

use async_trait::async_trait;
use axum::response::{Html, IntoResponse, Response};
use serde_json::Value;

use super::{HandlerResult, View, ViewMeta};
use crate::application::ports::templates::{Context, TemplateRenderer};
use crate::presentation::http::{
    error::{HttpError, HttpResult, IntoHttpResult},
    request::ViewRequest,
};

/// Context key a handler can set to pick another template.
pub const TEMPLATE_KEY: &str = "TEMPLATE";
/// Query parameter asking for the inline variant of a template.
pub const INLINE_FLAG: &str = "inline";

/// `some/tmpl.html` -> `some/inline/tmpl.html`; a bare name goes to `inline/`.
pub fn inline_template(template: &str) -> String {
    match template.rsplit_once('/') {
        Some((dir, file)) => format!("{dir}/inline/{file}"),
        None => format!("inline/{template}"),
    }
}

fn take_template_override(context: &mut Context) -> HttpResult<Option<String>> {
    match context.remove(TEMPLATE_KEY) {
        None => Ok(None),
        Some(Value::String(template)) => Ok(Some(template)),
        Some(other) => Err(HttpError::internal(format!(
            "`{TEMPLATE_KEY}` must name a template, got {other}"
        ))),
    }
}

pub(super) fn render_document(
    renderer: &dyn TemplateRenderer,
    template: &str,
    context: &Context,
) -> HttpResult<Response> {
    let document = renderer.render_to_string(template, context).into_http()?;
    Ok(Html(document).into_response())
}

/// Renders the mapping a view returns into an HTML document.
pub struct RenderWith<V> {
    view: V,
    template: String,
    renderer: Arc<dyn TemplateRenderer>,
}

/// Wrap `view` so mappings it returns are rendered with `template`, unless
/// the result names its own template (pair result or `TEMPLATE` key).
/// Requests carrying `?inline` get the `inline/` variant of the template.
pub fn render_with<V: View>(
    renderer: Arc<dyn TemplateRenderer>,
    template: impl Into<String>,
    view: V,
) -> RenderWith<V> {
    RenderWith {
        view,
        template: template.into(),
        renderer,
    }
}

#[async_trait]
impl<V: View> View for RenderWith<V> {
    fn meta(&self) -> ViewMeta {
        self.view.meta()
    }

    async fn call(&self, request: ViewRequest) -> HttpResult<HandlerResult> {
        let inline = request.query_params.contains(INLINE_FLAG);

        let (context, template) = match self.view.call(request).await? {
            HandlerResult::Passthrough(response) => {
                return Ok(HandlerResult::Passthrough(response));
            }
            HandlerResult::MappingWithTemplate(context, template) => (context, template),
            HandlerResult::Mapping(mut context) => {
                let template = take_template_override(&mut context)?
                    .unwrap_or_else(|| self.template.clone());
                (context, template)
            }
        };

        let template = if inline {
            let rewritten = inline_template(&template);
            tracing::debug!(from = %template, to = %rewritten, "inline template requested");
            rewritten
        } else {
            template
        };

        render_document(self.renderer.as_ref(), &template, &context).map(HandlerResult::Passthrough)
    }
}

/// Output of [`RenderFrom::render`].
pub enum Fragment {
    Text(String),
    Untouched(HandlerResult),
}

/// Renders mappings into a string fragment instead of a full response.
pub struct RenderFrom<V> {
    view: V,
    template: String,
    renderer: Arc<dyn TemplateRenderer>,
}

pub fn render_from<V: View>(
    renderer: Arc<dyn TemplateRenderer>,
    template: impl Into<String>,
    view: V,
) -> RenderFrom<V> {
    RenderFrom {
        view,
        template: template.into(),
        renderer,
    }
}

impl<V: View> RenderFrom<V> {
    /// Only [`HandlerResult::Mapping`] is rendered (honouring `TEMPLATE`);
    /// every other result comes back as [`Fragment::Untouched`].
    pub async fn render(&self, request: ViewRequest) -> HttpResult<Fragment> {
        match self.view.call(request).await? {
            HandlerResult::Mapping(mut context) => {
                let template =
                    take_template_override(&mut context)?.unwrap_or_else(|| self.template.clone());
                self.renderer
                    .render_to_string(&template, &context)
                    .into_http()
                    .map(Fragment::Text)
            }
            other => Ok(Fragment::Untouched(other)),
        }
    }
}

#[async_trait]
impl<V: View> View for RenderFrom<V> {
    fn meta(&self) -> ViewMeta {
        self.view.meta()
    }

    async fn call(&self, request: ViewRequest) -> HttpResult<HandlerResult> {
        match self.render(request).await? {
            Fragment::Text(text) => Ok(HandlerResult::passthrough(Html(text))),
            Fragment::Untouched(result) => Ok(result),
        }
    }
}
