//! # Application configuration: `second-brain.toml`
//!
//! Defines the TOML document the web binary embeds at build time
//! (filename: [`AppConfig::filename`] = `"second-brain.toml"`). It decides
//! which backend the client talks to, where the image feed comes from, and
//! under which key the session is stored.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://second-brain-web.onrender.com/api"
//!
//! [feed]
//! url = "https://dog.ceo/api/breeds/image/random"
//! batch_size = 5
//!
//! [session]
//! storage_key = "user"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with builder helpers (`with_api_url`, `with_batch_size`) and TOML (de)serialisation. |
//! | [`ApiConfig`] | Remote authentication API base URL. |
//! | [`FeedConfig`] | Image feed endpoint and batch size (default **5**). |
//! | [`SessionConfig`] | Durable storage key for the session record (default `"user"`). |
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! default configuration.

use serde::{Deserialize, Serialize};

use crate::record::DEFAULT_RECORD_KEY;

/// Top-level configuration stored in `second-brain.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Remote API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL all `/auth/*` paths are appended to.
    #[serde(default = "default_api_url")]
    pub base_url: String,
}

/// Image feed settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Endpoint; the batch size is appended as the last path segment.
    #[serde(default = "default_feed_url")]
    pub url: String,
    /// Images requested per fetch.
    #[serde(default = "default_batch_size")]
    pub batch_size: u32,
}

/// Session persistence settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_api_url() -> String {
    "https://second-brain-web.onrender.com/api".to_string()
}

fn default_feed_url() -> String {
    "https://dog.ceo/api/breeds/image/random".to_string()
}

fn default_batch_size() -> u32 {
    5
}

fn default_storage_key() -> String {
    DEFAULT_RECORD_KEY.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_api_url(),
        }
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            url: default_feed_url(),
            batch_size: default_batch_size(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl AppConfig {
    /// Builder method to point at another backend.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Builder method to set the feed batch size.
    pub fn with_batch_size(mut self, size: u32) -> Self {
        self.feed.batch_size = size;
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "second-brain.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
