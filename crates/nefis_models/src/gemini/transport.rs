//! HTTP transport seam for the Gemini client.

use crate::gemini::GenerateContentRequest;
use async_trait::async_trait;
use nefis_error::{GeminiError, GeminiErrorKind};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Status and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub body: String,
}

impl TransportResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a serialized request to the completion endpoint.
///
/// Implementations report failures that never produced an HTTP response as
/// [`GeminiErrorKind::Transport`]; any response, whatever its status, is
/// returned as a [`TransportResponse`].
#[async_trait]
pub trait GeminiTransport: Send + Sync {
    /// POST `body` as JSON to `url`, giving up after `timeout`.
    async fn post_json(
        &self,
        url: &str,
        body: &GenerateContentRequest,
        timeout: Duration,
    ) -> Result<TransportResponse, GeminiError>;
}

#[async_trait]
impl<T> GeminiTransport for Arc<T>
where
    T: GeminiTransport + ?Sized,
{
    async fn post_json(
        &self,
        url: &str,
        body: &GenerateContentRequest,
        timeout: Duration,
    ) -> Result<TransportResponse, GeminiError> {
        (**self).post_json(url, body, timeout).await
    }
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with a fresh connection pool.
    pub fn new() -> Result<Self, GeminiError> {
        let client = Client::builder().build().map_err(|e| {
            GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string()))
        })?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl GeminiTransport for ReqwestTransport {
    // The URL carries the API key as a query parameter, so it is never logged.
    #[instrument(skip_all, fields(timeout_secs = timeout.as_secs()))]
    async fn post_json(
        &self,
        url: &str,
        body: &GenerateContentRequest,
        timeout: Duration,
    ) -> Result<TransportResponse, GeminiError> {
        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                let e = e.without_url();
                error!(error = %e, timeout = e.is_timeout(), "HTTP request failed");
                GeminiError::new(GeminiErrorKind::Transport(e.to_string()))
            })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            let e = e.without_url();
            error!(error = %e, "Failed to read response body");
            GeminiError::new(GeminiErrorKind::Transport(e.to_string()))
        })?;

        debug!(status, body_len = body.len(), "Received response");
        Ok(TransportResponse { status, body })
    }
}
