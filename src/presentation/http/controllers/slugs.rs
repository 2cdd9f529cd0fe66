use axum::http::StatusCode;
use serde_json::json;

use super::{api_error, api_failure, app_state};
use crate::application::queries::pages::PreviewSlugQuery;
use crate::domain::page::PAGES_COLLECTION;
use crate::presentation::http::{error::HttpResult, request::ViewRequest, views::HandlerResult};

/// Which slug would `value` get? Nothing is stored.
pub async fn preview_slug(request: ViewRequest) -> HttpResult<HandlerResult> {
    let state = app_state(&request)?;
    let params = &request.write_params;

    let Some(value) = params.get("value") else {
        return api_error(StatusCode::BAD_REQUEST, "value is required");
    };
    let record_id = match params.get("record_id").filter(|id| !id.is_empty()) {
        Some(raw) => match raw.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => return api_error(StatusCode::BAD_REQUEST, "record_id must be an integer"),
        },
        None => None,
    };

    let query = PreviewSlugQuery {
        value: value.to_string(),
        collection: params.get("collection").unwrap_or(PAGES_COLLECTION).to_string(),
        record_id,
    };
    match state.services.page_queries.preview_slug(query).await {
        Ok(preview) => HandlerResult::mapping_of(json!(preview)),
        Err(err) => api_failure(err),
    }
}
