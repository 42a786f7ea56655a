//! Gemini connection settings.

use crate::RetryPolicy;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
/// Default API base URL (the model path is appended to it).
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Settings for [`GeminiClient`](crate::GeminiClient).
///
/// The API key is optional here so that a configuration can be loaded and
/// inspected without one; the client refuses to construct without it.
#[derive(Clone, PartialEq, Eq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
#[serde(default)]
pub struct GeminiConfig {
    /// API key sent as the `key` query parameter
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing)]
    api_key: Option<String>,
    /// Model identifier placed in the endpoint path
    #[builder(default = "DEFAULT_MODEL.to_string()")]
    model: String,
    /// Base URL of the API
    #[builder(default = "DEFAULT_BASE_URL.to_string()")]
    base_url: String,
    /// Attempts per completion, including the first
    #[builder(default = "3")]
    max_attempts: usize,
    /// Pause between attempts in milliseconds
    #[builder(default = "2000")]
    retry_backoff_ms: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_attempts: 3,
            retry_backoff_ms: 2000,
        }
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_attempts", &self.max_attempts)
            .field("retry_backoff_ms", &self.retry_backoff_ms)
            .finish()
    }
}

impl GeminiConfig {
    /// Replace the API key.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// The API key if it is set and not blank.
    pub fn usable_api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    /// Retry policy described by these settings.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.max_attempts,
            backoff: Duration::from_millis(self.retry_backoff_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let config = GeminiConfigBuilder::default().api_key("secret").build()?;
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.usable_api_key(), Some("secret"));
        assert_eq!(config.retry_policy(), RetryPolicy::default());
        Ok(())
    }

    #[test]
    fn test_blank_key_is_not_usable() {
        let config = GeminiConfig::default().with_api_key("   ");
        assert_eq!(config.usable_api_key(), None);
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiConfig::default().with_api_key("very-secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("very-secret"));
        assert!(printed.contains("redacted"));
    }
}
