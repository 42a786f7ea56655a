//! Per-call completion settings.

use derive_getters::Getters;
use std::time::Duration;

/// Sampling parameters and the per-attempt timeout for one completion.
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct CompletionOptions {
    /// Sampling temperature
    temperature: f32,
    /// Upper bound on generated tokens
    max_output_tokens: u32,
    /// Timeout for a single HTTP attempt
    timeout: Duration,
}

impl CompletionOptions {
    /// Settings for a single recipe: short output, 30 second attempts.
    pub fn recipe() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 2048,
            timeout: Duration::from_secs(30),
        }
    }

    /// Settings for a seven-day plan: long output, 60 second attempts.
    pub fn weekly_plan() -> Self {
        Self {
            temperature: 0.7,
            max_output_tokens: 8192,
            timeout: Duration::from_secs(60),
        }
    }
}
