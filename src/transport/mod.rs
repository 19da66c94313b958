//! Shared HTTP client construction, URL joining, and status mapping.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};

use crate::error::{A2aError, Result};
use crate::protocol::JsonRpcResponse;

/// Build the HTTP client shared by the resolver and the agent client.
///
/// `timeout` bounds connecting and each read, not the whole exchange: a
/// streaming response stays open for as long as the agent keeps sending.
pub fn build_http_client(timeout: Duration) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .connect_timeout(timeout)
        .read_timeout(timeout)
        .build()
        .map_err(|e| A2aError::Configuration(format!("Failed to build HTTP client: {e}")))
}

/// Headers carrying `Authorization: Bearer <token>`.
pub fn bearer_headers(token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    let value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
        A2aError::InvalidArgument("Bearer token contains characters not allowed in a header".into())
    })?;
    headers.insert(AUTHORIZATION, value);
    Ok(headers)
}

pub(crate) fn json_accept_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

/// Join a base address and a relative path with exactly one slash between them.
pub fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    format!("{base}/{path}")
}

/// Map a non-success HTTP response to an error.
///
/// Agents may report JSON-RPC errors with a non-2xx status; those are surfaced
/// as [`A2aError::JsonRpc`] so callers see the agent's own code and message.
pub fn status_to_error(status: u16, url: &str, body: &str) -> A2aError {
    if let Ok(envelope) = serde_json::from_str::<JsonRpcResponse<serde_json::Value>>(body) {
        if let Some(error) = envelope.error {
            return error.into();
        }
    }
    match status {
        401 | 403 => A2aError::Authentication(format!("{url} returned HTTP {status}: {body}")),
        _ => A2aError::http(status, url, body),
    }
}
