//! Routing client configuration

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use url::Url;

/// Configuration for the HERE Routing API v8 client
#[derive(Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Base URL of the Routing API v8
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key appended as `apiKey` by the HTTP transport (sensitive)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl std::fmt::Debug for RoutingConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoutingConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

fn default_base_url() -> String {
    "https://router.hereapi.com/v8".to_string()
}

const fn default_timeout_secs() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("integration_here/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl RoutingConfig {
    /// Create a configuration pointing at a custom base URL
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Set the API key
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::from(api_key.into()));
        self
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// The API key, if configured
    #[must_use]
    pub fn api_key_str(&self) -> Option<&str> {
        self.api_key.as_ref().map(|key| key.expose_secret())
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        Url::parse(&self.base_url).map_err(|e| format!("base_url is not a valid URL: {e}"))?;

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        if self.api_key_str().is_some_and(str::is_empty) {
            return Err("api_key must not be empty when set".to_string());
        }

        Ok(())
    }

    /// URL of the `routes` endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` cannot be parsed.
    pub fn routes_url(&self) -> Result<Url, String> {
        let base = format!("{}/", self.base_url.trim_end_matches('/'));
        Url::parse(&base)
            .and_then(|url| url.join("routes"))
            .map_err(|e| format!("base_url is not a valid URL: {e}"))
    }
}
