//! Echo handler for observing injected headers end to end.
//!
//! Responds to any method and path with a pretty-printed JSON document
//! describing what arrived: method, path, every header, the prefixed headers
//! on their own (keyed without the prefix) and the query parameters.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::headers::header_name;
use crate::http::request::RequestIdExt;

/// State shared by echo requests.
#[derive(Debug, Clone)]
pub struct EchoState {
    prefix: Arc<str>,
}

impl EchoState {
    /// `prefix` selects which headers are reported as path params.
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: Arc::from(prefix),
        }
    }
}

/// Body returned by the echo handler.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EchoResponse {
    pub method: String,
    pub path: String,
    pub headers: BTreeMap<String, String>,
    pub path_params: BTreeMap<String, String>,
    pub query_params: BTreeMap<String, Vec<String>>,
}

impl EchoResponse {
    /// Describe `request`, surfacing headers starting with `prefix`
    /// (case-insensitive) under `path_params`, keyed by the rest of the name
    /// with its first character upper-cased (`x-path-category` → `Category`).
    pub fn from_request<B>(request: &Request<B>, prefix: &str) -> Self {
        let headers = collect_headers(request.headers());

        let path_params = headers
            .iter()
            .filter_map(|(name, value)| {
                strip_prefix_ignore_case(name, prefix).map(|rest| (header_name("", rest), value.clone()))
            })
            .collect();

        let mut query_params: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let query = request.uri().query().unwrap_or_default();
        for (key, value) in url::form_urlencoded::parse(query.as_bytes()) {
            query_params
                .entry(key.into_owned())
                .or_default()
                .push(value.into_owned());
        }

        Self {
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
            headers,
            path_params,
            query_params,
        }
    }
}

/// Echo any request back as JSON.
pub async fn echo_handler(State(state): State<EchoState>, request: Request<Body>) -> Response {
    let echo = EchoResponse::from_request(&request, &state.prefix);

    tracing::info!(
        request_id = request.request_id().unwrap_or("unknown"),
        method = %echo.method,
        path = %echo.path,
        "Received request"
    );
    for (name, value) in &echo.path_params {
        tracing::info!(param = %name, value = %value, "Path parameter header");
    }

    match serde_json::to_string_pretty(&echo) {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body + "\n",
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Error encoding response");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error encoding response").into_response()
        }
    }
}

/// Header values as text; repeated headers joined with ", ".
fn collect_headers(headers: &HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();
    for (name, value) in headers {
        let value = String::from_utf8_lossy(value.as_bytes());
        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(&value);
            })
            .or_insert_with(|| value.into_owned());
    }
    collected
}

fn strip_prefix_ignore_case<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    let head = name.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        name.get(prefix.len()..)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request() {
        let request = Request::builder()
            .method("POST")
            .uri("/products/books/42?tag=a&tag=b&q=x%20y")
            .header("X-Path-Category", "books")
            .header("X-Path-Id", "42")
            .header("accept", "text/plain")
            .header("accept", "application/json")
            .body(())
            .unwrap();

        let echo = EchoResponse::from_request(&request, "X-Path-");

        assert_eq!(echo.method, "POST");
        assert_eq!(echo.path, "/products/books/42");
        assert_eq!(echo.headers["accept"], "text/plain, application/json");
        assert_eq!(echo.path_params.len(), 2);
        assert_eq!(echo.path_params["Category"], "books");
        assert_eq!(echo.path_params["Id"], "42");
        assert_eq!(echo.query_params["tag"], vec!["a", "b"]);
        assert_eq!(echo.query_params["q"], vec!["x y"]);
    }

    #[test]
    fn test_serialized_keys() {
        let request = Request::builder().uri("/").body(()).unwrap();
        let echo = EchoResponse::from_request(&request, "X-Path-");
        let json = serde_json::to_value(&echo).unwrap();

        for key in ["method", "path", "headers", "pathParams", "queryParams"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_strip_prefix_ignore_case() {
        assert_eq!(strip_prefix_ignore_case("x-path-id", "X-Path-"), Some("id"));
        assert_eq!(strip_prefix_ignore_case("x-pat", "X-Path-"), None);
        assert_eq!(strip_prefix_ignore_case("accept", "X-Path-"), None);
    }
}
