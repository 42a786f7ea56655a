//! Gemini completion errors and retry classification.

/// Gemini-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GeminiErrorKind {
    /// No API key was supplied to the client
    MissingApiKey,
    /// Failed to build the underlying HTTP client
    ClientCreation(String),
    /// Request never produced an HTTP response (timeout, refused connection, ...)
    Transport(String),
    /// Upstream answered with a non-success status
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason phrase
        message: String,
    },
    /// Response body did not carry `candidates[0].content.parts[0].text`
    MalformedResponse(String),
}

impl std::fmt::Display for GeminiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeminiErrorKind::MissingApiKey => {
                write!(f, "Gemini API key is not configured (set GEMINI_API_KEY)")
            }
            GeminiErrorKind::ClientCreation(msg) => {
                write!(f, "Failed to create HTTP client: {}", msg)
            }
            GeminiErrorKind::Transport(msg) => write!(f, "Gemini request failed: {}", msg),
            GeminiErrorKind::HttpStatus {
                status_code,
                message,
            } => write!(f, "HTTP {} error: {}", status_code, message),
            GeminiErrorKind::MalformedResponse(msg) => {
                write!(f, "Malformed Gemini response: {}", msg)
            }
        }
    }
}

impl GeminiErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Every failed exchange with the upstream is retried; configuration
    /// problems and malformed bodies are not, since repeating the request
    /// cannot fix them.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            GeminiErrorKind::Transport(_) | GeminiErrorKind::HttpStatus { .. }
        )
    }

    /// HTTP status code, when the upstream answered at all.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            GeminiErrorKind::HttpStatus { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use nefis_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for GeminiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Gemini Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for GeminiError {}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use nefis_error::{GeminiError, GeminiErrorKind, RetryableError};
///
/// let err = GeminiError::new(GeminiErrorKind::HttpStatus {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
/// assert!(err.is_retryable());
///
/// let err = GeminiError::new(GeminiErrorKind::MalformedResponse("no candidates".into()));
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger another attempt.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for GeminiError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
