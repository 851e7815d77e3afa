//! # Image feed client
//!
//! Fetches batches of random image URLs from the dog.ceo API for the
//! infinite-scroll gallery. This is a third-party service, so no bearer token
//! is ever attached.
//!
//! Wire format: `GET <url>/<batch_size>` answers
//! `{"message": ["https://...", ...], "status": "success"}`. Any other status
//! is treated as a failure.

use serde::Deserialize;
use store::config::FeedConfig;

use crate::client::{check_status, decode};
use crate::error::ApiError;

const FEED_FAILED: &str = "Failed to fetch dog images";

#[derive(Clone, Debug)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
    batch_size: u32,
}

#[derive(Debug, Deserialize)]
struct FeedResponse {
    status: String,
    message: serde_json::Value,
}

impl FeedClient {
    pub fn new(url: impl Into<String>, batch_size: u32) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            batch_size,
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.url.clone(), config.batch_size)
    }

    pub fn batch_url(&self) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), self.batch_size)
    }

    /// Fetch one batch of image URLs, in the order the service returned them.
    pub async fn fetch_batch(&self) -> Result<Vec<String>, ApiError> {
        let response = self.http.get(self.batch_url()).send().await.map_err(|e| {
            tracing::warn!("Feed request failed: {}", e);
            ApiError::Network
        })?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            tracing::warn!("Failed to read feed body: {}", e);
            ApiError::Network
        })?;
        check_status(status, &body, FEED_FAILED)?;
        decode_batch(&body)
    }
}

fn decode_batch(body: &str) -> Result<Vec<String>, ApiError> {
    let response: FeedResponse = decode(body)?;
    if response.status != "success" {
        return Err(ApiError::Malformed(format!("feed status {}", response.status)));
    }
    serde_json::from_value(response.message).map_err(|e| ApiError::Malformed(e.to_string()))
}
