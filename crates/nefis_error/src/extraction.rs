//! Errors raised while turning model output into structured records.

use derive_more::{Display, Error};

/// Specific reasons generated content could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum ExtractionErrorKind {
    /// The completion text was empty or whitespace.
    #[display("Generated content is empty")]
    EmptyContent,
    /// Neither the direct parse nor the brace-span fallback produced valid JSON
    /// of the expected shape.
    #[display("Malformed generated content: {}", _0)]
    Decode(String),
    /// JSON decoded but violates the record's shape contract.
    #[display("Generated content has the wrong shape: {}", _0)]
    Shape(String),
}

/// Extraction error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Extraction Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractionError {
    /// The specific error kind.
    pub kind: ExtractionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// File where error occurred.
    pub file: &'static str,
}

impl ExtractionError {
    /// Creates a new error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
