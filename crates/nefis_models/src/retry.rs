//! Bounded retry with a fixed pause between attempts.

use nefis_error::RetryableError;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, instrument, warn};

/// Retry policy for upstream requests.
///
/// The pause is taken on the tokio clock, so tests running with a paused
/// runtime advance through it instantly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Zero is treated as one.
    pub max_attempts: usize,
    /// Pause between consecutive attempts.
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_secs(2),
        }
    }
}

impl RetryPolicy {
    /// Policy that never retries.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
        }
    }

    /// Worst-case time spent waiting between attempts.
    pub fn total_backoff(&self) -> Duration {
        let pauses = self.max_attempts.max(1) - 1;
        self.backoff * u32::try_from(pauses).unwrap_or(u32::MAX)
    }

    /// Runs `operation` until it succeeds, fails with a non-retryable error,
    /// or the attempt budget is spent. The last error is returned as-is.
    #[instrument(skip(self, operation), fields(max_attempts = self.max_attempts))]
    pub async fn run<F, Fut, T, E>(&self, mut operation: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: std::future::Future<Output = Result<T, E>>,
        E: RetryableError + std::fmt::Display,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            debug!(attempt, "Executing operation");

            match operation().await {
                Ok(result) => {
                    if attempt > 1 {
                        debug!(attempt, "Operation succeeded after retry");
                    }
                    return Ok(result);
                }
                Err(err) => {
                    if !err.is_retryable() {
                        warn!(attempt, error = %err, "Error is not retryable, failing immediately");
                        return Err(err);
                    }

                    if attempt >= max_attempts {
                        warn!(attempt, error = %err, "All retry attempts exhausted");
                        return Err(err);
                    }

                    warn!(
                        attempt,
                        backoff_ms = self.backoff.as_millis() as u64,
                        error = %err,
                        "Retrying after failure"
                    );
                    sleep(self.backoff).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nefis_error::{GeminiError, GeminiErrorKind};

    fn unavailable() -> GeminiError {
        GeminiError::new(GeminiErrorKind::HttpStatus {
            status_code: 503,
            message: "unavailable".to_string(),
        })
    }

    #[test]
    fn test_total_backoff() {
        assert_eq!(RetryPolicy::default().total_backoff(), Duration::from_secs(4));
        assert_eq!(RetryPolicy::no_retry().total_backoff(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausts_budget_and_returns_last_error() {
        let mut calls = 0;
        let started = tokio::time::Instant::now();
        let result: Result<(), GeminiError> = RetryPolicy::default()
            .run(|| {
                calls += 1;
                async { Err(unavailable()) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls, 3);
        let waited = started.elapsed();
        assert!(waited >= Duration::from_secs(4) && waited < Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_non_retryable_fails_immediately() {
        let mut calls = 0;
        let result: Result<(), GeminiError> = RetryPolicy::default()
            .run(|| {
                calls += 1;
                async {
                    Err(GeminiError::new(GeminiErrorKind::MalformedResponse(
                        "no candidates".to_string(),
                    )))
                }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_attempts_still_runs_once() {
        let policy = RetryPolicy {
            max_attempts: 0,
            backoff: Duration::from_secs(2),
        };
        let mut calls = 0;
        let result: Result<u8, GeminiError> = policy
            .run(|| {
                calls += 1;
                async { Ok(7) }
            })
            .await;

        assert_eq!(result.ok(), Some(7));
        assert_eq!(calls, 1);
    }
}
