//! OpenAlex API client.
//!
//! Provides an async HTTP client with:
//! - Connection pooling via reqwest
//! - Request logging middleware
//! - Polite-pool identification (`mailto`) on every request
//!
//! There is no retry and no caching: every call goes to OpenAlex once and any
//! failure is returned to the caller as-is.

mod middleware;
mod query;

pub use middleware::RequestLogging;
pub use query::{WorksQuery, filters};

use reqwest::Client;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use url::Url;

use crate::config::Config;
use crate::error::{ClientError, ClientResult};
use crate::models::WorksResponse;

/// OpenAlex API client.
#[derive(Clone)]
pub struct OpenAlexClient {
    /// HTTP client with middleware.
    client: ClientWithMiddleware,

    /// Polite-pool contact email.
    email: Option<String>,

    /// API base URL.
    api_url: Url,
}

impl OpenAlexClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is invalid or HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let api_url = Url::parse(&config.api_url)?;
        if api_url.cannot_be_a_base() {
            anyhow::bail!("API URL cannot be used as a base: {api_url}");
        }

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(concat!("openalex-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let client = ClientBuilder::new(client).with(RequestLogging).build();

        Ok(Self { client, email: config.email, api_url })
    }

    /// Check if a polite-pool email is configured.
    #[must_use]
    pub fn has_email(&self) -> bool {
        self.email.is_some()
    }

    /// Search works.
    ///
    /// Results keep the upstream order.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn search_works(&self, query: &WorksQuery) -> ClientResult<WorksResponse> {
        let url = self.endpoint(&["works"]);
        let params = query.to_params();

        self.get(url, params).await
    }

    /// Get a single work by ID.
    ///
    /// Accepts anything OpenAlex resolves under `/works/{id}`: `W...` IDs,
    /// OpenAlex URLs, `doi:`/`pmid:` prefixed IDs and DOI URLs. Slashes in the
    /// ID stay path separators; every other reserved character (`?`, `#`, `%`)
    /// is percent-encoded so it cannot leak into the query string. The record
    /// is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns error on API failure.
    pub async fn get_work(&self, work_id: &str) -> ClientResult<serde_json::Value> {
        let segments: Vec<&str> = std::iter::once("works").chain(work_id.split('/')).collect();
        let url = self.endpoint(&segments);

        self.get(url, Vec::new()).await
    }

    /// Build an endpoint URL by appending encoded path segments to the base URL.
    ///
    /// `.` and `..` segments are dropped so an ID cannot walk out of its endpoint.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.api_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty()
                .extend(segments.iter().filter(|s| !matches!(**s, "." | "..")));
        }
        url
    }

    /// Make a GET request.
    async fn get<T>(&self, url: Url, mut params: Vec<(String, String)>) -> ClientResult<T>
    where
        T: serde::de::DeserializeOwned,
    {
        if let Some(ref email) = self.email {
            params.push(("mailto".to_string(), email.clone()));
        }

        tracing::debug!(url = %url, "GET");

        let response = self.client.get(url.clone()).query(&params).send().await?;

        let response = Self::handle_response(url.as_str(), response).await?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).map_err(ClientError::from)
    }

    /// Handle API response status codes.
    async fn handle_response(
        url: &str,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();

        match status.as_u16() {
            404 if text.is_empty() => Err(ClientError::not_found(url)),
            404 => Err(ClientError::not_found(text)),
            400 => Err(ClientError::bad_request(text)),
            500..=599 => Err(ClientError::server(status.as_u16(), text)),
            _ => Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text }),
        }
    }
}

impl std::fmt::Debug for OpenAlexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAlexClient")
            .field("api_url", &self.api_url.as_str())
            .field("has_email", &self.has_email())
            .finish()
    }
}
