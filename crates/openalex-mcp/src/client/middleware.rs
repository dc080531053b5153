//! Middleware for the HTTP client.
//!
//! Composed into the reqwest client via `reqwest-middleware`.

use std::time::Instant;

use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};

/// Logs every upstream request with its status and latency.
///
/// Only the path is logged; the query string carries the contact email.
#[derive(Debug, Default, Clone, Copy)]
pub struct RequestLogging;

#[async_trait::async_trait]
impl Middleware for RequestLogging {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let method = req.method().clone();
        let path = req.url().path().to_string();
        let started = Instant::now();

        let result = next.run(req, extensions).await;
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        match &result {
            Ok(response) => tracing::debug!(
                %method,
                %path,
                status = response.status().as_u16(),
                elapsed_ms,
                "OpenAlex request"
            ),
            Err(e) => tracing::warn!(%method, %path, elapsed_ms, error = %e, "OpenAlex request failed"),
        }

        result
    }
}
