use axum::{http::StatusCode, response::Redirect};
use serde_json::json;

use super::{api_error, api_failure, app_state};
use crate::application::{
    commands::pages::{CreatePageCommand, DeletePageCommand, RenamePageCommand},
    ports::templates::Context,
    queries::pages::GetPageBySlugQuery,
};
use crate::presentation::http::{
    error::{HttpResult, IntoHttpResult},
    request::ViewRequest,
    views::{DefaultContext, HandlerResult},
};

const PAGES_INDEX: &str = "/pages";

fn slug_param(request: &ViewRequest) -> String {
    request.path_param("slug").unwrap_or_default().to_string()
}

/// Where to go after a destructive action; only same-site paths are honoured.
fn next_location(request: &ViewRequest) -> &str {
    request
        .query_params
        .get("next")
        .filter(|next| next.starts_with('/') && !next.starts_with("//"))
        .unwrap_or(PAGES_INDEX)
}

pub async fn list_pages(request: ViewRequest) -> HttpResult<HandlerResult> {
    let state = app_state(&request)?;
    let pages = state.services.page_queries.list_pages().await.into_http()?;
    let count = pages.len();
    HandlerResult::mapping_of(json!({ "pages": pages, "count": count }))
}

pub async fn page_detail(request: ViewRequest) -> HttpResult<HandlerResult> {
    let state = app_state(&request)?;
    let page = state
        .services
        .page_queries
        .get_page_by_slug(GetPageBySlugQuery {
            slug: slug_param(&request),
        })
        .await
        .into_http()?;
    HandlerResult::with_template(json!({ "page": page }), "pages/detail.html")
}

pub async fn create_page(request: ViewRequest) -> HttpResult<HandlerResult> {
    let state = app_state(&request)?;
    let Some(title) = request.write_params.get("title") else {
        return api_error(StatusCode::BAD_REQUEST, "title is required");
    };

    let command = CreatePageCommand {
        title: title.to_string(),
    };
    match state.services.page_commands.create_page(command).await {
        Ok(page) => HandlerResult::mapping_of(json!({ "page": page })),
        Err(err) => api_failure(err),
    }
}

pub async fn rename_page(request: ViewRequest) -> HttpResult<HandlerResult> {
    let state = app_state(&request)?;
    let Some(title) = request.write_params.get("title") else {
        return api_error(StatusCode::BAD_REQUEST, "title is required");
    };

    let command = RenamePageCommand {
        slug: slug_param(&request),
        title: title.to_string(),
    };
    match state.services.page_commands.rename_page(command).await {
        Ok(page) => HandlerResult::mapping_of(json!({ "page": page })),
        Err(err) => api_failure(err),
    }
}

/// Confirmation prompt naming the page about to be deleted.
pub async fn delete_context(request: ViewRequest) -> HttpResult<Context> {
    let state = app_state(&request)?;
    let page = state
        .services
        .page_queries
        .get_page_by_slug(GetPageBySlugQuery {
            slug: slug_param(&request),
        })
        .await
        .into_http()?;

    let mut extra = Context::new();
    extra.insert("page".into(), json!(page));
    Ok(DefaultContext {
        title: format!("Delete \"{}\"?", page.title),
        text: "This cannot be undone.".into(),
        submit: "Delete".into(),
        back: Some(format!("{PAGES_INDEX}/{}", page.slug)),
        extra,
    }
    .to_context())
}

pub async fn delete_page(request: ViewRequest) -> HttpResult<HandlerResult> {
    let state = app_state(&request)?;
    state
        .services
        .page_commands
        .delete_page(DeletePageCommand {
            slug: slug_param(&request),
        })
        .await
        .into_http()?;

    Ok(HandlerResult::passthrough(Redirect::to(next_location(&request))))
}
