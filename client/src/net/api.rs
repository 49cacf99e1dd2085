//! REST API helpers for the roster endpoint.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error, since the request is only
//! issued from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport, status and decoding failures are kept apart in `FetchError`
//! but all collapse to one display string via `FetchError::message`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

/// Collection resource for all users.
pub const USERS_ENDPOINT: &str = "/api/users";

/// Shown when a failure carries no description of its own.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Failure of the users request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The request could not be sent or the response could not be received.
    #[error("{0}")]
    Network(String),

    /// A response arrived with a non-2xx status.
    #[error("HTTP error! status: {status}{}", status_suffix(.status_text))]
    HttpStatus { status: u16, status_text: String },

    /// The body was not a JSON array of users.
    #[error("{0}")]
    Parse(String),
}

impl FetchError {
    /// User-visible description of this failure.
    pub fn message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_owned()
        } else {
            text
        }
    }
}

fn status_suffix(status_text: &str) -> String {
    let trimmed = status_text.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(" ({trimmed})")
    }
}

/// Classify a received response.
///
/// # Errors
///
/// Returns `HttpStatus` for any status outside `200..300`, and `Parse` when
/// a successful body does not decode as a list of users.
pub fn interpret_response(status: u16, status_text: &str, body: &str) -> Result<Vec<User>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::HttpStatus { status, status_text: status_text.to_owned() });
    }
    serde_json::from_str::<Vec<User>>(body).map_err(|e| FetchError::Parse(e.to_string()))
}

/// Fetch every user from `/api/users`, preserving response order.
///
/// # Errors
///
/// Returns a `FetchError` describing whichever stage failed.
pub async fn fetch_users() -> Result<Vec<User>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let result = fetch_users_over_http().await;
        match &result {
            Ok(users) => log::debug!("fetched {} users", users.len()),
            Err(e) => log::warn!("users request failed: {e}"),
        }
        result
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(FetchError::Network("not available on server".to_owned()))
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_users_over_http() -> Result<Vec<User>, FetchError> {
    let resp = gloo_net::http::Request::get(USERS_ENDPOINT)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    let status = resp.status();
    let status_text = resp.status_text();
    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    interpret_response(status, &status_text, &body)
}
