//! `/api` passthrough to the backend.
//!
//! Requests keep their method, path, query, body and end-to-end headers.
//! `Host` is replaced by the backend's own host. Upstream status codes,
//! including failures, are returned unchanged; only an unreachable backend
//! becomes `502 Bad Gateway`.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::uri::PathAndQuery;
use axum::http::header::{CONNECTION, CONTENT_LENGTH};
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Headers scoped to a single connection, never forwarded.
const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend could not be reached or did not answer in time.
    #[error("backend unreachable: {0}")]
    Upstream(String),

    /// The backend answered but its body could not be read.
    #[error("backend body read failed: {0}")]
    Body(String),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, "proxy request failed");
        (StatusCode::BAD_GATEWAY, self.to_string()).into_response()
    }
}

pub(crate) fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| h.eq_ignore_ascii_case(name))
}

pub(crate) fn upstream_url(base: &str, path_and_query: &str) -> String {
    let base = base.trim_end_matches('/');
    if path_and_query.starts_with('/') {
        format!("{base}{path_and_query}")
    } else {
        format!("{base}/{path_and_query}")
    }
}

/// Header names a `Connection` value marks as connection-scoped, lowercased.
fn connection_listed(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(CONNECTION)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(','))
        .map(|name| name.trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

fn end_to_end(headers: &HeaderMap) -> HeaderMap {
    let listed = connection_listed(headers);
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name.as_str()) && !listed.iter().any(|l| l == name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Headers returned to the caller. A `HEAD` response has no body to measure,
/// so the backend's `content-length` is kept as-is.
fn response_headers(headers: &HeaderMap, method: &Method) -> HeaderMap {
    let mut kept = end_to_end(headers);
    if *method == Method::HEAD {
        if let Some(len) = headers.get(CONTENT_LENGTH) {
            kept.insert(CONTENT_LENGTH, len.clone());
        }
    }
    kept
}

/// Any method on `/api` or `/api/*` — replay against the backend.
pub async fn forward(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ProxyError> {
    let path_and_query = uri.path_and_query().map_or("/", PathAndQuery::as_str);
    let url = upstream_url(&state.backend_url, path_and_query);

    let upstream = state
        .http
        .request(method.clone(), &url)
        .headers(end_to_end(&headers))
        .body(body)
        .send()
        .await
        .map_err(|e| ProxyError::Upstream(e.to_string()))?;

    let status = upstream.status();
    let upstream_headers = response_headers(upstream.headers(), &method);
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    tracing::debug!(%method, %url, status = status.as_u16(), "proxied");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = upstream_headers;
    Ok(response)
}
