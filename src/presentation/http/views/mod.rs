//! View adapters.
//!
//! A [`View`] turns a [`ViewRequest`] into a [`HandlerResult`]. Adapters such
//! as [`render_with`], [`require_post`] and [`require_confirmation`] wrap
//! another view, shape its result and report the wrapped view's [`ViewMeta`]
//! as their own, so adapters nest freely and routing, logging and tests still
//! see the original handler.

mod ajax;
mod confirm;
mod render;

use std::{future::Future, pin::Pin, sync::Arc};

use async_trait::async_trait;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use super::{
    error::{HttpError, HttpResult},
    request::ViewRequest,
};
use crate::application::ports::templates::Context;

pub use ajax::{RequireMethod, error_status, require_method, require_post};
pub use confirm::{
    ContextBuilder, DEFAULT_CONFIRM_KEY, DEFAULT_CONFIRM_TEMPLATE, DefaultContext,
    FnContextBuilder, RequireConfirmation, context_fn, require_confirmation,
};
pub use render::{
    Fragment, INLINE_FLAG, RenderFrom, RenderWith, TEMPLATE_KEY, inline_template, render_from,
    render_with,
};

/// What a handler produced for one request.
pub enum HandlerResult {
    /// A finished response, handed on untouched.
    Passthrough(Response),
    /// Template variables; may carry a `TEMPLATE` override.
    Mapping(Context),
    /// Template variables plus the template to render them with.
    MappingWithTemplate(Context, String),
}

impl HandlerResult {
    pub fn passthrough(response: impl IntoResponse) -> Self {
        Self::Passthrough(response.into_response())
    }

    /// Serialize `value` into a [`HandlerResult::Mapping`]. Anything that is
    /// not a JSON object is rejected.
    pub fn mapping_of(value: impl Serialize) -> HttpResult<Self> {
        to_context(value).map(Self::Mapping)
    }

    pub fn with_template(value: impl Serialize, template: impl Into<String>) -> HttpResult<Self> {
        to_context(value).map(|context| Self::MappingWithTemplate(context, template.into()))
    }
}

fn to_context(value: impl Serialize) -> HttpResult<Context> {
    match serde_json::to_value(value) {
        Ok(Value::Object(context)) => Ok(context),
        Ok(other) => Err(HttpError::internal(format!(
            "handler context must be a JSON object, got {other}"
        ))),
        Err(err) => Err(HttpError::internal(format!(
            "handler context is not serializable: {err}"
        ))),
    }
}

/// Identity of a view, kept intact through every adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMeta {
    pub name: &'static str,
    pub module: &'static str,
    pub doc: Option<&'static str>,
}

impl ViewMeta {
    pub const fn new(name: &'static str, module: &'static str) -> Self {
        Self {
            name,
            module,
            doc: None,
        }
    }

    pub const fn with_doc(mut self, doc: &'static str) -> Self {
        self.doc = Some(doc);
        self
    }
}

/// `view_meta!("name")` or `view_meta!("name", "doc")`, recording the caller's module path.
#[macro_export]
macro_rules! view_meta {
    ($name:expr) => {
        $crate::presentation::http::views::ViewMeta::new($name, module_path!())
    };
    ($name:expr, $doc:expr) => {
        $crate::presentation::http::views::ViewMeta::new($name, module_path!()).with_doc($doc)
    };
}

#[async_trait]
pub trait View: Send + Sync {
    fn meta(&self) -> ViewMeta;
    async fn call(&self, request: ViewRequest) -> HttpResult<HandlerResult>;
}

#[async_trait]
impl<V> View for Arc<V>
where
    V: View + ?Sized,
{
    fn meta(&self) -> ViewMeta {
        (**self).meta()
    }

    async fn call(&self, request: ViewRequest) -> HttpResult<HandlerResult> {
        (**self).call(request).await
    }
}

/// A plain async function (or closure) used as a view.
pub struct FnView<F> {
    meta: ViewMeta,
    handler: F,
}

pub fn fn_view<F, Fut>(meta: ViewMeta, handler: F) -> FnView<F>
where
    F: Fn(ViewRequest) -> Fut + Send + Sync,
    Fut: Future<Output = HttpResult<HandlerResult>> + Send + 'static,
{
    FnView { meta, handler }
}

#[async_trait]
impl<F, Fut> View for FnView<F>
where
    F: Fn(ViewRequest) -> Fut + Send + Sync,
    Fut: Future<Output = HttpResult<HandlerResult>> + Send + 'static,
{
    fn meta(&self) -> ViewMeta {
        self.meta
    }

    async fn call(&self, request: ViewRequest) -> HttpResult<HandlerResult> {
        (self.handler)(request).await
    }
}

pub type ViewFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

/// Mount a view as an axum handler.
pub fn view_handler<V>(view: V) -> impl Fn(ViewRequest) -> ViewFuture + Clone + Send + Sync + 'static
where
    V: View + 'static,
{
    let view = Arc::new(view);
    move |request: ViewRequest| {
        let view = Arc::clone(&view);
        Box::pin(async move { dispatch(view.as_ref(), request).await }) as ViewFuture
    }
}

/// Run `view` and turn its result into a response. A context that no
/// adapter rendered is a server error.
pub async fn dispatch<V>(view: &V, request: ViewRequest) -> Response
where
    V: View + ?Sized,
{
    match view.call(request).await {
        Ok(HandlerResult::Passthrough(response)) => response,
        Ok(HandlerResult::Mapping(_) | HandlerResult::MappingWithTemplate(..)) => {
            HttpError::internal(format!(
                "view `{}` returned a context that no adapter rendered",
                view.meta().name
            ))
            .into_response()
        }
        Err(err) => err.into_response(),
    }
}
