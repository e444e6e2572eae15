//! `[cms]` section configuration.
//!
//! Connection settings for the Ghost content API.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// Environment variable overriding `[cms].url`.
pub const ENV_API_URL: &str = "GHOST_API_URL";

/// Environment variable overriding `[cms].key`.
pub const ENV_API_KEY: &str = "GHOST_CONTENT_API_KEY";

/// `[cms]` section in slugpress.toml - content API connection.
///
/// `url` and `key` are usually supplied through `GHOST_API_URL` and
/// `GHOST_CONTENT_API_KEY` so the key stays out of the config file.
///
/// # Example
/// ```toml
/// [cms]
/// url = "https://demo.ghost.io"
/// version = "v4.0"
/// timeout = 30
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct CmsConfig {
    /// Base URL of the Ghost site (without `/ghost/api/...`).
    #[serde(default)]
    pub url: String,

    /// Content API key.
    #[serde(default)]
    pub key: String,

    /// Value of the `Accept-Version` header.
    #[serde(default = "defaults::cms::version")]
    #[educe(Default = defaults::cms::version())]
    pub version: String,

    /// Request timeout in seconds.
    #[serde(default = "defaults::cms::timeout")]
    #[educe(Default = defaults::cms::timeout())]
    pub timeout: u64,
}

impl CmsConfig {
    /// Override `url`/`key` from the environment, through `lookup`.
    ///
    /// Empty variables are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(url) = non_empty(ENV_API_URL) {
            self.url = url;
        }
        if let Some(key) = non_empty(ENV_API_KEY) {
            self.key = key;
        }
    }
}
