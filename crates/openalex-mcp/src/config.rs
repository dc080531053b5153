//! Configuration for the OpenAlex MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the OpenAlex API.
    pub const BASE_URL: &str = "https://api.openalex.org";

    /// Environment variable holding the polite-pool contact email.
    pub const EMAIL_ENV: &str = "OPENALEX_EMAIL";

    /// Environment variable overriding the API base URL.
    pub const API_URL_ENV: &str = "OPENALEX_API_URL";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contact email sent as `mailto` to join the OpenAlex polite pool.
    pub email: Option<String>,

    /// Base URL for the OpenAlex API (for testing with mock servers).
    pub api_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with an optional contact email.
    ///
    /// Blank emails are treated as absent.
    #[must_use]
    pub fn new(email: Option<String>) -> Self {
        Self {
            email: email.filter(|e| !e.trim().is_empty()),
            api_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Override the API base URL. A trailing slash is dropped.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        let api_url = api_url.into();
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            email: None,
            api_url: base_url.trim_end_matches('/').to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let email = std::env::var(api::EMAIL_ENV).ok();
        let config = Self::new(email);

        match std::env::var(api::API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Ok(config.with_api_url(url)),
            Ok(_) | Err(std::env::VarError::NotPresent) => Ok(config),
            Err(e) => Err(anyhow::anyhow!("{} is not valid unicode: {e}", api::API_URL_ENV)),
        }
    }

    /// Check if a polite-pool email is configured.
    #[must_use]
    pub const fn has_email(&self) -> bool {
        self.email.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
