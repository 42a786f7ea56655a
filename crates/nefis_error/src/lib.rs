//! Error types for the Nefis recipe assistant.
//!
//! Every error records the file and line where it was created. Crate-specific
//! errors roll up into [`NefisError`] so callers at the edge (the CLI) can
//! handle everything through one type.

mod config;
mod extraction;
mod gemini;
mod media;
mod nutrition;

pub use config::ConfigError;
pub use extraction::{ExtractionError, ExtractionErrorKind};
pub use gemini::{GeminiError, GeminiErrorKind, RetryableError};
pub use media::MediaError;
pub use nutrition::{NutritionError, NutritionErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum NefisErrorKind {
    /// Configuration could not be loaded or is incomplete
    #[display("{}", _0)]
    Config(ConfigError),
    /// Completion request failed
    #[display("{}", _0)]
    Gemini(GeminiError),
    /// Completion text could not be decoded
    #[display("{}", _0)]
    Extraction(ExtractionError),
    /// Calculator input was invalid
    #[display("{}", _0)]
    Nutrition(NutritionError),
    /// Image resolver could not be created
    #[display("{}", _0)]
    Media(MediaError),
}

/// Nefis error with kind discrimination.
#[derive(Debug)]
pub struct NefisError(Box<NefisErrorKind>);

impl NefisError {
    /// Create a new error from a kind.
    pub fn new(kind: NefisErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NefisErrorKind {
        &self.0
    }

    /// Short message suitable for showing to an end user.
    ///
    /// Location details stay in the logs; the user only learns what to do next.
    pub fn user_message(&self) -> String {
        match self.kind() {
            NefisErrorKind::Config(_) => {
                "The application is not configured correctly. Check nefis.toml.".to_string()
            }
            NefisErrorKind::Gemini(e) if e.kind == GeminiErrorKind::MissingApiKey => {
                "AI suggestions are unavailable: no Gemini API key is configured.".to_string()
            }
            NefisErrorKind::Gemini(e) => match e.kind.status_code() {
                Some(code) => format!(
                    "The AI service returned an error (HTTP {}). Please try again later.",
                    code
                ),
                None => "The AI service could not be reached. Please try again later.".to_string(),
            },
            NefisErrorKind::Extraction(_) => {
                "The AI answer could not be understood. Please try again.".to_string()
            }
            NefisErrorKind::Nutrition(e) => format!("Please check your inputs: {}", e.kind()),
            NefisErrorKind::Media(_) => "Image links cannot be checked right now.".to_string(),
        }
    }
}

impl std::fmt::Display for NefisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Nefis Error: {}", self.0)
    }
}

impl std::error::Error for NefisError {}

// Generic From implementation for any type that converts to NefisErrorKind
impl<T> From<T> for NefisError
where
    T: Into<NefisErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Nefis operations.
pub type NefisResult<T> = std::result::Result<T, NefisError>;
