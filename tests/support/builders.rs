// tests/support/builders.rs
use axum::body::Body;
use axum::http::{Method, Request, Uri, header::CONTENT_TYPE};

use web_sugar::presentation::http::request::{Params, ViewRequest};

pub fn get(uri: &str) -> ViewRequest {
    ViewRequest::new(Method::GET, uri.parse::<Uri>().expect("valid uri"))
}

pub fn post(uri: &str) -> ViewRequest {
    ViewRequest::new(Method::POST, uri.parse::<Uri>().expect("valid uri"))
}

pub fn post_form(uri: &str, form: &[(&str, &str)]) -> ViewRequest {
    post(uri).with_write_params(form.iter().copied().collect::<Params>())
}

/// An HTTP request with a urlencoded form body, for driving the router.
pub fn http_form(method: Method, uri: &str, form: &[(&str, &str)]) -> Request<Body> {
    let body = serde_urlencoded::to_string(form).expect("encode form");
    Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .expect("request")
}

pub fn http_get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}
