// tests/support/helpers.rs
use std::sync::Arc;

use axum::body;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::Value;

use web_sugar::application::ports::templates::{Context, TemplateRenderer};
use web_sugar::application::ports::util::SlugGenerator;
use web_sugar::application::services::ApplicationServices;
use web_sugar::domain::page::PageRepository;
use web_sugar::domain::slug::SlugIndex;
use web_sugar::infrastructure::repositories::InMemoryPageRepository;
use web_sugar::infrastructure::templates::TeraRenderer;
use web_sugar::infrastructure::util::DefaultSlugGenerator;
use web_sugar::presentation::http::state::HttpState;

pub fn template_dir() -> String {
    format!("{}/templates", env!("CARGO_MANIFEST_DIR"))
}

pub fn build_test_state() -> HttpState {
    let store = Arc::new(InMemoryPageRepository::new());
    let page_repo: Arc<dyn PageRepository> = Arc::clone(&store) as Arc<dyn PageRepository>;
    let slug_index: Arc<dyn SlugIndex> = store;
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);
    let renderer: Arc<dyn TemplateRenderer> =
        Arc::new(TeraRenderer::from_dir(template_dir()).expect("templates load"));

    let services = Arc::new(ApplicationServices::new(
        page_repo,
        slug_index,
        Some(slugger),
        renderer,
    ));
    HttpState { services }
}

pub fn make_test_router() -> axum::Router {
    web_sugar::presentation::http::routes::build_router(build_test_state())
}

/// Turn a `json!` object literal into a template context.
pub fn context(value: Value) -> Context {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

pub async fn body_bytes(resp: Response) -> Vec<u8> {
    body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec()
}

pub async fn body_text(resp: Response) -> String {
    String::from_utf8(body_bytes(resp).await).expect("utf-8 body")
}

pub async fn body_json(resp: Response) -> Value {
    let ct = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    serde_json::from_slice(&body_bytes(resp).await).expect("expected valid json body")
}

/// Assert a data-API error payload: `{"error": {"type": <status>, "message": ...}}`.
pub async fn assert_api_error(resp: Response, expected_status: StatusCode) -> Value {
    assert_eq!(resp.status(), expected_status);
    let json = body_json(resp).await;
    assert_eq!(
        json["error"]["type"].as_u64(),
        Some(u64::from(expected_status.as_u16())),
        "unexpected error payload: {}",
        json
    );
    assert!(
        json["error"]["message"].as_str().is_some_and(|m| !m.is_empty()),
        "expected non-empty error message"
    );
    json
}

/// Assert an `HttpError` body: `{"error": <reason>, "message": ...}`.
pub async fn assert_error_response(resp: Response, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status(), expected_status);
    let json = body_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
