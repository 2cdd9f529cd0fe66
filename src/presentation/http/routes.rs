// src/presentation/http/routes.rs
use std::{sync::Arc, time::Duration};

use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{any, get},
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::presentation::http::{
    controllers::{pages, slugs},
    state::HttpState,
    views::{
        context_fn, fn_view, render_with, require_confirmation, require_post, view_handler,
    },
};
use crate::view_meta;

pub fn build_router(state: HttpState) -> Router {
    let renderer = state.services.renderer();

    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    let list_pages = render_with(
        Arc::clone(&renderer),
        "pages/list.html",
        fn_view(view_meta!("list_pages", "All pages."), pages::list_pages),
    );
    let page_detail = render_with(
        Arc::clone(&renderer),
        "pages/detail.html",
        fn_view(view_meta!("page_detail", "One page."), pages::page_detail),
    );
    let delete_page = require_confirmation(
        Arc::clone(&renderer),
        fn_view(view_meta!("delete_page", "Delete a page."), pages::delete_page),
    )
    .context_builder(context_fn(pages::delete_context));

    // Mounted for every method; the guard answers mismatches.
    let create_page = require_post(fn_view(view_meta!("create_page"), pages::create_page));
    let rename_page = require_post(fn_view(view_meta!("rename_page"), pages::rename_page));
    let preview_slug = require_post(fn_view(view_meta!("preview_slug"), slugs::preview_slug));

    Router::new()
        .route("/health", get(health))
        .route("/pages", get(view_handler(list_pages)))
        .route("/pages/{slug}", get(view_handler(page_detail)))
        .route("/pages/{slug}/delete", any(view_handler(delete_page)))
        .route("/api/pages", any(view_handler(create_page)))
        .route("/api/pages/{slug}/rename", any(view_handler(rename_page)))
        .route("/api/slugs", any(view_handler(preview_slug)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
