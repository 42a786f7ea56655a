//! Image URL resolution.

use crate::find_image_reference;
use derive_getters::Getters;
use nefis_error::MediaError;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::redirect::Policy;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

/// Timeouts for the two probes the resolver makes.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[serde(default)]
pub struct ImageResolverConfig {
    /// HEAD probe timeout in seconds
    #[builder(default = "5")]
    head_timeout_secs: u64,
    /// GET probe timeout in seconds
    #[builder(default = "6")]
    get_timeout_secs: u64,
}

impl Default for ImageResolverConfig {
    fn default() -> Self {
        Self {
            head_timeout_secs: 5,
            get_timeout_secs: 6,
        }
    }
}

impl ImageResolverConfig {
    /// HEAD probe timeout.
    pub fn head_timeout(&self) -> Duration {
        Duration::from_secs(self.head_timeout_secs)
    }

    /// GET probe timeout.
    pub fn get_timeout(&self) -> Duration {
        Duration::from_secs(self.get_timeout_secs)
    }
}

/// Turns a user-supplied link (short link, recipe page, direct image) into
/// a direct image URL.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    client: Client,
    config: ImageResolverConfig,
}

impl ImageResolver {
    /// Creates a resolver that follows redirects.
    pub fn new(config: ImageResolverConfig) -> Result<Self, MediaError> {
        let client = Client::builder()
            .redirect(Policy::limited(10))
            .build()
            .map_err(|e| MediaError::new(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self::from_client(client, config))
    }

    /// Wraps an existing client. The client's redirect policy is used as-is.
    pub fn from_client(client: Client, config: ImageResolverConfig) -> Self {
        Self { client, config }
    }

    /// Resolves `candidate` to a direct image URL.
    ///
    /// Returns `None` for blank or unparsable input, any network failure, or
    /// a page with no usable image reference. Never fails.
    #[instrument(skip(self))]
    pub async fn resolve(&self, candidate: &str) -> Option<String> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return None;
        }

        let url = match Url::parse(candidate) {
            Ok(url) => url,
            Err(e) => {
                debug!(error = %e, "Not a URL");
                return None;
            }
        };

        match self.probe(url).await {
            Ok(Some(resolved)) => {
                debug!(resolved = %resolved, "Resolved image URL");
                Some(resolved)
            }
            Ok(None) => {
                debug!("No image found");
                None
            }
            Err(e) => {
                debug!(error = %e, "Image probe failed");
                None
            }
        }
    }

    /// Resolved URL, or `candidate` unchanged when nothing better was found.
    pub async fn resolve_or_original(&self, candidate: &str) -> String {
        match self.resolve(candidate).await {
            Some(resolved) => resolved,
            None => candidate.to_string(),
        }
    }

    async fn probe(&self, url: Url) -> Result<Option<String>, reqwest::Error> {
        let head = self
            .client
            .head(url.clone())
            .timeout(self.config.head_timeout())
            .send()
            .await?;
        if is_image(head.headers()) {
            return Ok(Some(head.url().to_string()));
        }

        let page = self
            .client
            .get(url)
            .timeout(self.config.get_timeout())
            .send()
            .await?;
        if is_image(page.headers()) {
            return Ok(Some(page.url().to_string()));
        }

        let base = page.url().clone();
        let html = page.text().await?;
        Ok(find_image_reference(&html)
            .and_then(|reference| base.join(reference).ok())
            .map(String::from))
    }
}

fn is_image(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.trim().to_ascii_lowercase().starts_with("image"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_image_content_type_detection() {
        let mut headers = HeaderMap::new();
        assert!(!is_image(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("image/webp"));
        assert!(is_image(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("Image/JPEG"));
        assert!(is_image(&headers));

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"));
        assert!(!is_image(&headers));
    }

    #[test]
    fn test_default_timeouts() {
        let config = ImageResolverConfig::default();
        assert_eq!(config.head_timeout(), Duration::from_secs(5));
        assert_eq!(config.get_timeout(), Duration::from_secs(6));
    }
}
