//! Configuration and credentials for the Cloudbet API client.
//!
//! This module provides the [`Config`] struct for managing the API key and
//! client settings.

use std::fmt;
use std::time::Duration;

/// Production host of the Cloudbet Sports API
pub const DEFAULT_BASE_URL: &str = "https://sports-api.cloudbet.com";

/// Default HTTP request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the Cloudbet API client
///
/// The API key is not validated here. A bad key is only reported by the
/// server when a request is made.
///
/// # Example
///
/// ```rust
/// use cloudbet_sports::Config;
///
/// let config = Config::new("my-api-key");
///
/// // Custom timeout
/// let config = Config::new("key")
///     .with_timeout(std::time::Duration::from_secs(30));
///
/// // Point at another host (staging, local mock server)
/// let config = Config::new("key").with_base_url("http://127.0.0.1:8080");
/// ```
#[derive(Clone)]
pub struct Config {
    /// API key sent as `X-API-Key`
    api_key: String,

    /// Scheme and host of the API, without a trailing slash
    base_url: String,

    /// HTTP request timeout
    timeout: Duration,
}

impl Config {
    /// Create a new configuration for the production API
    ///
    /// # Arguments
    ///
    /// * `api_key` - Your API key from the Cloudbet account settings
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the API base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the HTTP request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Get the REST API base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Get the timeout duration
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Keeps the key out of logs and panic messages.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
