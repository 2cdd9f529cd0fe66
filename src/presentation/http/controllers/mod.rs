// src/presentation/http/controllers/mod.rs
pub mod pages;
pub mod slugs;

use axum::http::StatusCode;
use serde_json::json;

use crate::application::error::ApplicationError;
use crate::presentation::http::{
    error::{HttpError, HttpResult},
    request::ViewRequest,
    state::HttpState,
    views::HandlerResult,
};

fn app_state(request: &ViewRequest) -> HttpResult<HttpState> {
    request.extension::<HttpState>().ok_or_else(|| {
        HttpError::from_error(ApplicationError::infrastructure("application state missing"))
    })
}

/// Data-API error payload; `require_post` turns `type` into the response status.
fn api_error(status: StatusCode, message: impl Into<String>) -> HttpResult<HandlerResult> {
    HandlerResult::mapping_of(json!({
        "error": { "type": status.as_u16(), "message": message.into() }
    }))
}

fn api_failure(err: ApplicationError) -> HttpResult<HandlerResult> {
    let err = HttpError::from_error(err);
    api_error(err.status(), err.message())
}
