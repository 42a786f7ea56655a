//! Gemini completion client.

use crate::RetryPolicy;
use crate::gemini::{
    CompletionOptions, GeminiConfig, GeminiTransport, GenerateContentRequest, ReqwestTransport,
    conversions,
};
use nefis_error::{GeminiError, GeminiErrorKind};
use std::time::Duration;
use tracing::{debug, error, info, instrument};

/// Client for the Gemini `generateContent` endpoint.
///
/// Holds no per-request state; clone it freely.
#[derive(Clone)]
pub struct GeminiClient<T = ReqwestTransport> {
    transport: T,
    api_key: String,
    model: String,
    base_url: String,
    retry: RetryPolicy,
}

impl<T> std::fmt::Debug for GeminiClient<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .finish_non_exhaustive()
    }
}

impl GeminiClient<ReqwestTransport> {
    /// Creates a client that talks HTTP through `reqwest`.
    ///
    /// # Errors
    ///
    /// Fails with [`GeminiErrorKind::MissingApiKey`] when the configuration has
    /// no usable key; no network activity happens in that case.
    pub fn new(config: &GeminiConfig) -> Result<Self, GeminiError> {
        require_api_key(config)?;
        Self::with_transport(config, ReqwestTransport::new()?)
    }
}

impl<T> GeminiClient<T>
where
    T: GeminiTransport,
{
    /// Creates a client over a custom transport.
    ///
    /// # Errors
    ///
    /// Fails with [`GeminiErrorKind::MissingApiKey`] when the configuration has
    /// no usable key.
    #[instrument(skip_all, fields(model = %config.model()))]
    pub fn with_transport(config: &GeminiConfig, transport: T) -> Result<Self, GeminiError> {
        let api_key = require_api_key(config)?.to_string();
        let retry = config.retry_policy();

        debug!(
            model = %config.model(),
            max_attempts = retry.max_attempts,
            "Created Gemini client"
        );

        Ok(Self {
            transport,
            api_key,
            model: config.model().clone(),
            base_url: config.base_url().trim_end_matches('/').to_string(),
            retry,
        })
    }

    /// Sends `prompt` and returns the first candidate's text.
    ///
    /// Failed exchanges are retried according to the client's [`RetryPolicy`];
    /// the last error is returned once the budget is spent.
    ///
    /// # Errors
    ///
    /// - [`GeminiErrorKind::Transport`] or [`GeminiErrorKind::HttpStatus`] when
    ///   every attempt failed
    /// - [`GeminiErrorKind::MalformedResponse`] when the reply lacks
    ///   `candidates[0].content.parts[0].text`
    #[instrument(skip(self, prompt, options), fields(model = %self.model, prompt_len = prompt.len()))]
    pub async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<String, GeminiError> {
        let request = conversions::to_request(prompt, options)?;
        let url = self.endpoint();
        let timeout = *options.timeout();

        let body = self
            .retry
            .run(|| self.send_once(&url, &request, timeout))
            .await?;

        let text = conversions::from_response_body(&body)?;
        info!(completion_len = text.len(), "Received completion");
        Ok(text)
    }

    async fn send_once(
        &self,
        url: &str,
        request: &GenerateContentRequest,
        timeout: Duration,
    ) -> Result<String, GeminiError> {
        let response = self.transport.post_json(url, request, timeout).await?;

        if !response.is_success() {
            error!(
                status = response.status,
                error = %response.body,
                "Gemini API error"
            );
            return Err(GeminiError::new(GeminiErrorKind::HttpStatus {
                status_code: response.status,
                message: response.body,
            }));
        }

        Ok(response.body)
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    /// Returns the model name.
    pub fn model_name(&self) -> &str {
        &self.model
    }

    /// Returns the retry policy.
    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }
}

fn require_api_key(config: &GeminiConfig) -> Result<&str, GeminiError> {
    config.usable_api_key().ok_or_else(|| {
        error!("Gemini API key is not configured");
        GeminiError::new(GeminiErrorKind::MissingApiKey)
    })
}
