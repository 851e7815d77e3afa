//! # HTTP client for the Second Brain backend
//!
//! [`ApiClient`] owns one `reqwest::Client`, the backend base URL, and the
//! current bearer token. Every request built through it carries
//! `Authorization: Bearer <token>` when a token is set and nothing otherwise.
//! The token is only changed by [`crate::SessionStore`], which keeps it in
//! step with the stored user record.
//!
//! Responses go through [`check_status`] and [`decode`], which turn non-2xx
//! statuses and schema mismatches into [`ApiError`]. There is no retry: a
//! failed call fails once.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Optional error payload the backend attaches to failures.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub(crate) fn replace_token(&mut self, token: Option<String>) {
        self.token = token.filter(|t| !t.is_empty());
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Build a JSON POST to `path`, authorised when a token is known.
    pub fn post_json<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> RequestBuilder {
        self.authorize(self.http.post(self.url(path)).json(body))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and return the body of a 2xx response.
    ///
    /// `fallback` is the message used when a failure carries no server message.
    pub async fn send(&self, request: RequestBuilder, fallback: &str) -> Result<String, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Request failed without response: {}", e);
            ApiError::Network
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            tracing::warn!("Failed to read response body: {}", e);
            ApiError::Network
        })?;
        check_status(status, &body, fallback)?;
        Ok(body)
    }
}

/// Map a non-2xx status to [`ApiError::Rejected`], preferring the server's
/// `message` field over `fallback`.
pub(crate) fn check_status(status: u16, body: &str, fallback: &str) -> Result<(), ApiError> {
    if (200..300).contains(&status) {
        return Ok(());
    }
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());
    tracing::debug!("Request rejected with status {}: {}", status, message);
    Err(ApiError::Rejected { status, message })
}

/// Decode a 2xx body against a strict schema.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}
