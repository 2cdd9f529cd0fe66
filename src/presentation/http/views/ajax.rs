use async_trait::async_trait;
use axum::{
    Json,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use super::{HandlerResult, View, ViewMeta};
use crate::application::ports::templates::Context;
use crate::presentation::http::{error::HttpResult, request::ViewRequest};

/// JSON endpoint guard: only `method` reaches the view, mappings become JSON.
pub struct RequireMethod<V> {
    view: V,
    method: Method,
}

/// Accept only POST. Any other method answers
/// `{"error": {"type": 405, "message": "Accepts only POST request"}}`
/// without calling the view.
pub fn require_post<V: View>(view: V) -> RequireMethod<V> {
    require_method(Method::POST, view)
}

pub fn require_method<V: View>(method: Method, view: V) -> RequireMethod<V> {
    RequireMethod { view, method }
}

fn method_not_allowed(method: &Method) -> Context {
    let mut payload = Context::new();
    payload.insert(
        "error".into(),
        json!({
            "type": StatusCode::METHOD_NOT_ALLOWED.as_u16(),
            "message": format!("Accepts only {method} request"),
        }),
    );
    payload
}

/// Status for a payload carrying an `error` entry: `error.type` when it is a
/// valid HTTP status, 500 otherwise. `None` when there is no `error`.
///
/// The application-level error code doubles as the transport status here;
/// handlers should stick to codes that make sense on the wire.
pub fn error_status(payload: &Context) -> Option<StatusCode> {
    let error = payload.get("error")?;
    let status = error
        .get("type")
        .and_then(Value::as_u64)
        .and_then(|code| u16::try_from(code).ok())
        .and_then(|code| StatusCode::from_u16(code).ok())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    Some(status)
}

fn json_response(payload: Context) -> Response {
    let status = error_status(&payload).unwrap_or(StatusCode::OK);
    (status, Json(Value::Object(payload))).into_response()
}

#[async_trait]
impl<V: View> View for RequireMethod<V> {
    fn meta(&self) -> ViewMeta {
        self.view.meta()
    }

    async fn call(&self, request: ViewRequest) -> HttpResult<HandlerResult> {
        let result = if request.method == self.method {
            self.view.call(request).await?
        } else {
            tracing::warn!(
                view = self.view.meta().name,
                got = %request.method,
                expected = %self.method,
                "method not allowed"
            );
            HandlerResult::Mapping(method_not_allowed(&self.method))
        };

        match result {
            HandlerResult::Mapping(payload) => Ok(HandlerResult::Passthrough(json_response(payload))),
            other => Ok(other),
        }
    }
}
