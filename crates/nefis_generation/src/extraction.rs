//! Turn free-form completion text into typed records.
//!
//! Models often wrap JSON in Markdown fences, escape newlines, or add a line
//! of prose around the object. Extraction cleans those up in a fixed order:
//!
//! 1. Keep only the contents of the first fenced block, if any.
//! 2. Replace literal `\n`, `\r` and real newlines with spaces.
//! 3. Parse the cleaned text directly.
//! 4. Otherwise parse the span from the first `{` to the last `}`.
//!
//! The decoded record must then satisfy its [`ShapeContract`].

use nefis_core::ShapeContract;
use nefis_error::{ExtractionError, ExtractionErrorKind};
use regex::Regex;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use tracing::{debug, instrument, warn};

/// First fenced block, optionally tagged `json` in any case.
static CODE_FENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)```(?:json)?\s*(.*?)```").expect("Invalid code fence regex")
});

/// Greedy span from the first `{` to the last `}`.
static OBJECT_SPAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{.*\}").expect("Invalid object span regex"));

/// Contents of the first fenced block, or the whole text when there is none.
pub fn strip_code_fence(raw: &str) -> &str {
    CODE_FENCE_REGEX
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or(raw, |m| m.as_str())
}

/// Replace escaped and real line breaks with single spaces.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\\n", " ")
        .replace('\r', " ")
        .replace('\n', " ")
}

/// Greedy `{ ... }` span, if the text contains one.
pub fn object_span(text: &str) -> Option<&str> {
    OBJECT_SPAN_REGEX.find(text).map(|m| m.as_str())
}

/// Decode completion text into `T`.
///
/// # Errors
///
/// - [`ExtractionErrorKind::EmptyContent`] for blank input
/// - [`ExtractionErrorKind::Decode`] when neither the cleaned text nor its
///   object span parses as `T`
/// - [`ExtractionErrorKind::Shape`] when the record violates its contract
#[instrument(skip(raw), fields(raw_len = raw.len(), record = std::any::type_name::<T>()))]
pub fn decode<T>(raw: &str) -> Result<T, ExtractionError>
where
    T: DeserializeOwned + ShapeContract,
{
    if raw.trim().is_empty() {
        warn!("Completion text is empty");
        return Err(ExtractionError::new(ExtractionErrorKind::EmptyContent));
    }

    let cleaned = normalize_newlines(strip_code_fence(raw));

    let record: T = match serde_json::from_str(cleaned.trim()) {
        Ok(record) => record,
        Err(direct) => {
            debug!(error = %direct, "Direct parse failed, trying object span");
            let span = object_span(&cleaned).ok_or_else(|| {
                warn!(error = %direct, "No JSON object in completion text");
                ExtractionError::new(ExtractionErrorKind::Decode(format!(
                    "no JSON object found ({})",
                    direct
                )))
            })?;
            serde_json::from_str(span).map_err(|e| {
                warn!(error = %e, "Object span did not decode");
                ExtractionError::new(ExtractionErrorKind::Decode(e.to_string()))
            })?
        }
    };

    record.check_shape().map_err(|violation| {
        warn!(violation = %violation, "Decoded record has the wrong shape");
        ExtractionError::new(ExtractionErrorKind::Shape(violation))
    })?;

    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence_variants() {
        assert_eq!(strip_code_fence("```json\n{\"a\": 1}\n```").trim(), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```JSON {\"a\": 1}```").trim(), "{\"a\": 1}");
        assert_eq!(strip_code_fence("```\n{\"a\": 1}\n```").trim(), "{\"a\": 1}");
        assert_eq!(strip_code_fence("{\"a\": 1}"), "{\"a\": 1}");
    }

    #[test]
    fn test_only_first_fenced_block_is_kept() {
        let raw = "```json\n{\"a\": 1}\n```\nand also\n```json\n{\"b\": 2}\n```";
        assert_eq!(strip_code_fence(raw).trim(), "{\"a\": 1}");
    }

    #[test]
    fn test_normalize_newlines() {
        assert_eq!(normalize_newlines("a\\nb\r\nc\nd"), "a b  c d");
    }

    #[test]
    fn test_object_span_is_greedy() {
        assert_eq!(
            object_span("x {\"a\": {\"b\": 1}} y } z"),
            Some("{\"a\": {\"b\": 1}} y }")
        );
        assert_eq!(object_span("no braces"), None);
    }
}
