// src/presentation/http/views/confirm.rs
use std::{future::Future, sync::Arc};

use async_trait::async_trait;
use serde_json::Value;

use super::{HandlerResult, View, ViewMeta, render::render_document};
use crate::application::ports::templates::{Context, TemplateRenderer};
use crate::presentation::http::{error::HttpResult, request::ViewRequest};

pub const DEFAULT_CONFIRM_TEMPLATE: &str = "confirm.html";
pub const DEFAULT_CONFIRM_KEY: &str = "__confirm__";

/// Builds the context of a confirmation page from the pending request.
#[async_trait]
pub trait ContextBuilder: Send + Sync {
    async fn build(&self, request: &ViewRequest) -> HttpResult<Context>;
}

/// Generic "are you sure?" prompt.
#[derive(Debug, Clone)]
pub struct DefaultContext {
    pub title: String,
    pub text: String,
    pub submit: String,
    pub back: Option<String>,
    pub extra: Context,
}

impl Default for DefaultContext {
    fn default() -> Self {
        Self {
            title: "Are you sure?".into(),
            text: String::new(),
            submit: "Confirm".into(),
            back: None,
            extra: Context::new(),
        }
    }
}

impl DefaultContext {
    pub fn to_context(&self) -> Context {
        let mut context = Context::new();
        context.insert("title".into(), Value::String(self.title.clone()));
        context.insert("text".into(), Value::String(self.text.clone()));
        context.insert("submit".into(), Value::String(self.submit.clone()));
        context.insert(
            "back".into(),
            self.back.clone().map_or(Value::Null, Value::String),
        );
        context.extend(self.extra.clone());
        context
    }
}

#[async_trait]
impl ContextBuilder for DefaultContext {
    async fn build(&self, _request: &ViewRequest) -> HttpResult<Context> {
        Ok(self.to_context())
    }
}

pub struct FnContextBuilder<F>(F);

/// Use an async function of the request as a [`ContextBuilder`].
pub fn context_fn<F, Fut>(builder: F) -> FnContextBuilder<F>
where
    F: Fn(ViewRequest) -> Fut + Send + Sync,
    Fut: Future<Output = HttpResult<Context>> + Send + 'static,
{
    FnContextBuilder(builder)
}

#[async_trait]
impl<F, Fut> ContextBuilder for FnContextBuilder<F>
where
    F: Fn(ViewRequest) -> Fut + Send + Sync,
    Fut: Future<Output = HttpResult<Context>> + Send + 'static,
{
    async fn build(&self, request: &ViewRequest) -> HttpResult<Context> {
        (self.0)(request.clone()).await
    }
}

/// Confirmation gate in front of a view.
///
/// Without the confirm key among the form parameters the confirmation page is
/// rendered and the view is not called. With it, the view runs with the
/// original request and its result is returned as is. No state is kept between
/// the two requests.
pub struct RequireConfirmation<V> {
    view: V,
    renderer: Arc<dyn TemplateRenderer>,
    template: String,
    key: String,
    context_builder: Option<Arc<dyn ContextBuilder>>,
}

pub fn require_confirmation<V: View>(
    renderer: Arc<dyn TemplateRenderer>,
    view: V,
) -> RequireConfirmation<V> {
    RequireConfirmation {
        view,
        renderer,
        template: DEFAULT_CONFIRM_TEMPLATE.into(),
        key: DEFAULT_CONFIRM_KEY.into(),
        context_builder: Some(Arc::new(DefaultContext::default())),
    }
}

impl<V: View> RequireConfirmation<V> {
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn context_builder(mut self, builder: impl ContextBuilder + 'static) -> Self {
        self.context_builder = Some(Arc::new(builder));
        self
    }

    /// Render the confirmation page with an empty context.
    pub fn without_context(mut self) -> Self {
        self.context_builder = None;
        self
    }
}

#[async_trait]
impl<V: View> View for RequireConfirmation<V> {
    fn meta(&self) -> ViewMeta {
        self.view.meta()
    }

    async fn call(&self, request: ViewRequest) -> HttpResult<HandlerResult> {
        if request.write_params.contains(&self.key) {
            return self.view.call(request).await;
        }

        let context = match &self.context_builder {
            Some(builder) => builder.build(&request).await?,
            None => Context::new(),
        };
        tracing::debug!(
            view = self.view.meta().name,
            template = %self.template,
            "confirmation required"
        );
        render_document(self.renderer.as_ref(), &self.template, &context)
            .map(HandlerResult::Passthrough)
    }
}
