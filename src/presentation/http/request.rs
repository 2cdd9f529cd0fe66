// src/presentation/http/request.rs
use std::collections::HashMap;

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{Extensions, HeaderMap, Method, Uri, header::CONTENT_TYPE},
};

use super::error::{HttpError, HttpResult};

const MAX_FORM_BYTES: usize = 1024 * 1024;
const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Multi-valued request parameters in arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn parse(raw: &[u8]) -> Result<Self, serde_urlencoded::de::Error> {
        serde_urlencoded::from_bytes::<Vec<(String, String)>>(raw).map(Self)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.iter().any(|(k, _)| k == key)
    }

    /// Last value sent for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// What the view adapters see of an inbound request.
///
/// `write_params` holds the form body and is only filled for
/// `application/x-www-form-urlencoded` requests.
#[derive(Debug, Clone)]
pub struct ViewRequest {
    pub method: Method,
    pub uri: Uri,
    pub path_params: HashMap<String, String>,
    pub query_params: Params,
    pub write_params: Params,
    pub extensions: Extensions,
}

fn query_params(uri: &Uri) -> HttpResult<Params> {
    match uri.query() {
        Some(query) => Params::parse(query.as_bytes())
            .map_err(|err| HttpError::bad_request(format!("invalid query string: {err}"))),
        None => Ok(Params::default()),
    }
}

impl ViewRequest {
    /// Build a request outside of axum. The query string is parsed the way
    /// the extractor parses it and rejected with a 400 when it cannot be.
    pub fn try_new(method: Method, uri: Uri) -> HttpResult<Self> {
        let query_params = query_params(&uri)?;
        Ok(Self {
            method,
            uri,
            path_params: HashMap::new(),
            query_params,
            write_params: Params::default(),
            extensions: Extensions::new(),
        })
    }

    /// Lenient [`ViewRequest::try_new`]: an unparseable query string yields
    /// empty `query_params` instead of an error.
    pub fn new(method: Method, uri: Uri) -> Self {
        Self::try_new(method.clone(), uri.clone()).unwrap_or_else(|_| Self {
            method,
            uri,
            path_params: HashMap::new(),
            query_params: Params::default(),
            write_params: Params::default(),
            extensions: Extensions::new(),
        })
    }

    pub fn with_write_params(mut self, params: Params) -> Self {
        self.write_params = params;
        self
    }

    pub fn with_path_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.path_params.insert(key.into(), value.into());
        self
    }

    pub fn path_param(&self, key: &str) -> Option<&str> {
        self.path_params.get(key).map(String::as_str)
    }

    pub fn extension<T: Clone + Send + Sync + 'static>(&self) -> Option<T> {
        self.extensions.get::<T>().cloned()
    }
}

fn is_form(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with(FORM_CONTENT_TYPE))
}

impl<S> FromRequest<S> for ViewRequest
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();

        let path_params = Path::<HashMap<String, String>>::from_request_parts(&mut parts, state)
            .await
            .map(|Path(params)| params)
            .unwrap_or_default();

        let query_params = query_params(&parts.uri)?;

        let write_params = if is_form(&parts.headers) {
            let bytes = axum::body::to_bytes(body, MAX_FORM_BYTES)
                .await
                .map_err(|err| HttpError::bad_request(format!("unreadable form body: {err}")))?;
            Params::parse(&bytes)
                .map_err(|err| HttpError::bad_request(format!("invalid form body: {err}")))?
        } else {
            Params::default()
        };

        Ok(Self {
            method: parts.method,
            uri: parts.uri,
            path_params,
            query_params,
            write_params,
            extensions: parts.extensions,
        })
    }
}
