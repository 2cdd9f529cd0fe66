use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::http::StatusCode;
use axum::response::Redirect;
use serde_json::json;

mod support;

use support::{FailingRenderer, RecordingRenderer, body_text, context, get};
use web_sugar::presentation::http::error::HttpResult;
use web_sugar::presentation::http::request::ViewRequest;
use web_sugar::presentation::http::views::{
    Fragment, HandlerResult, View, dispatch, fn_view, render_from, render_with,
};
use web_sugar::view_meta;

async fn returns_a(_request: ViewRequest) -> HttpResult<HandlerResult> {
    HandlerResult::mapping_of(json!({ "a": 1 }))
}

async fn returns_a_with_override(_request: ViewRequest) -> HttpResult<HandlerResult> {
    HandlerResult::mapping_of(json!({ "a": 1, "TEMPLATE": "other.html" }))
}

async fn returns_pair(_request: ViewRequest) -> HttpResult<HandlerResult> {
    HandlerResult::with_template(json!({ "a": 1 }), "some/pair.html")
}

async fn redirects(_request: ViewRequest) -> HttpResult<HandlerResult> {
    Ok(HandlerResult::passthrough(Redirect::to("/elsewhere")))
}

/// A plain mapping is rendered with the default template and the same context
#[tokio::test]
async fn mapping_renders_default_template() {
    let renderer = Arc::new(RecordingRenderer::new());
    let view = render_with(renderer.clone(), "default.html", fn_view(view_meta!("v"), returns_a));

    let resp = dispatch(&view, get("/")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "rendered:default.html");

    let (template, ctx) = renderer.last().unwrap();
    assert_eq!(template, "default.html");
    assert_eq!(ctx, context(json!({ "a": 1 })));
}

/// The TEMPLATE key picks the template and is stripped from the context
#[tokio::test]
async fn template_key_overrides_and_is_stripped() {
    let renderer = Arc::new(RecordingRenderer::new());
    let view = render_with(
        renderer.clone(),
        "default.html",
        fn_view(view_meta!("v"), returns_a_with_override),
    );

    dispatch(&view, get("/")).await;

    let (template, ctx) = renderer.last().unwrap();
    assert_eq!(template, "other.html");
    assert_eq!(ctx, context(json!({ "a": 1 })));
}

/// A mapping paired with a template uses that template
#[tokio::test]
async fn paired_template_wins_over_default() {
    let renderer = Arc::new(RecordingRenderer::new());
    let view = render_with(renderer.clone(), "default.html", fn_view(view_meta!("v"), returns_pair));

    dispatch(&view, get("/")).await;

    assert_eq!(renderer.last().unwrap().0, "some/pair.html");
}

/// `?inline` inserts an `inline/` segment before the file name
#[tokio::test]
async fn inline_flag_rewrites_template_path() {
    let renderer = Arc::new(RecordingRenderer::new());
    let view = render_with(renderer.clone(), "some/tmpl.html", fn_view(view_meta!("v"), returns_a));

    dispatch(&view, get("/?inline")).await;
    dispatch(&view, get("/?inline=0")).await;
    dispatch(&view, get("/?other=1")).await;

    let templates: Vec<String> = renderer.calls().into_iter().map(|(t, _)| t).collect();
    assert_eq!(
        templates,
        ["some/inline/tmpl.html", "some/inline/tmpl.html", "some/tmpl.html"]
    );
}

/// Inline rewriting also applies to overridden templates
#[tokio::test]
async fn inline_flag_applies_to_pair_templates() {
    let renderer = Arc::new(RecordingRenderer::new());
    let view = render_with(renderer.clone(), "default.html", fn_view(view_meta!("v"), returns_pair));

    dispatch(&view, get("/?inline")).await;

    assert_eq!(renderer.last().unwrap().0, "some/inline/pair.html");
}

/// Ready responses pass through without rendering
#[tokio::test]
async fn passthrough_is_not_rendered() {
    let renderer = Arc::new(RecordingRenderer::new());
    let view = render_with(renderer.clone(), "default.html", fn_view(view_meta!("v"), redirects));

    let resp = dispatch(&view, get("/")).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/elsewhere");
    assert!(renderer.calls().is_empty());
}

/// Render failures surface as server errors
#[tokio::test]
async fn render_errors_become_500() {
    let view = render_with(Arc::new(FailingRenderer), "missing.html", fn_view(view_meta!("v"), returns_a));

    let resp = dispatch(&view, get("/")).await;
    support::assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").await;
}

/// Adapters report the wrapped view's identity
#[tokio::test]
async fn wrapper_keeps_view_identity() {
    let inner = fn_view(view_meta!("profile", "Shows a profile."), returns_a);
    let expected = inner.meta();
    let view = render_with(Arc::new(RecordingRenderer::new()), "default.html", inner);

    let meta = view.meta();
    assert_eq!(meta, expected);
    assert_eq!(meta.name, "profile");
    assert_eq!(meta.doc, Some("Shows a profile."));
    assert!(meta.module.ends_with("views_render"));
}

/// Each invocation runs the handler once
#[tokio::test]
async fn handler_runs_once_per_request() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let inner = fn_view(view_meta!("counted"), move |_request: ViewRequest| {
        let counter = Arc::clone(&counter);
        async move {
            counter.fetch_add(1, Ordering::SeqCst);
            HandlerResult::mapping_of(json!({}))
        }
    });
    let view = render_with(Arc::new(RecordingRenderer::new()), "default.html", inner);

    dispatch(&view, get("/")).await;
    dispatch(&view, get("/")).await;
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

/// A mapping no adapter rendered is a server error at dispatch
#[tokio::test]
async fn unrendered_mapping_is_a_server_error() {
    let view = fn_view(view_meta!("bare"), returns_a);

    let resp = dispatch(&view, get("/")).await;
    support::assert_error_response(resp, StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").await;
}

/// render_from renders mappings to a string, honouring TEMPLATE
#[tokio::test]
async fn render_from_renders_mappings_to_text() {
    let renderer = Arc::new(RecordingRenderer::new());
    let view = render_from(
        renderer.clone(),
        "snippet.html",
        fn_view(view_meta!("v"), returns_a_with_override),
    );

    match view.render(get("/?inline")).await.unwrap() {
        Fragment::Text(text) => assert_eq!(text, "rendered:other.html"),
        Fragment::Untouched(_) => panic!("expected rendered text"),
    }
    let (template, ctx) = renderer.last().unwrap();
    assert_eq!(template, "other.html");
    assert_eq!(ctx, context(json!({ "a": 1 })));
}

/// render_from leaves anything but a plain mapping alone
#[tokio::test]
async fn render_from_leaves_other_results_untouched() {
    let renderer = Arc::new(RecordingRenderer::new());
    let pair = render_from(renderer.clone(), "snippet.html", fn_view(view_meta!("v"), returns_pair));
    let redirect = render_from(renderer.clone(), "snippet.html", fn_view(view_meta!("v"), redirects));

    assert!(matches!(
        pair.render(get("/")).await.unwrap(),
        Fragment::Untouched(HandlerResult::MappingWithTemplate(_, ref t)) if t == "some/pair.html"
    ));
    assert!(matches!(
        redirect.render(get("/")).await.unwrap(),
        Fragment::Untouched(HandlerResult::Passthrough(_))
    ));
    assert!(renderer.calls().is_empty());
}
