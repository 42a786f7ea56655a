//! Conversions between prompts/completions and Gemini wire types.

use crate::gemini::{
    CompletionOptions, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use nefis_error::{GeminiError, GeminiErrorKind};

/// Builds the request body for a single-turn text prompt.
pub fn to_request(
    prompt: &str,
    options: &CompletionOptions,
) -> Result<GenerateContentRequest, GeminiError> {
    GenerateContentRequest::builder()
        .contents(vec![Content::text(prompt)])
        .generation_config(GenerationConfig {
            temperature: *options.temperature(),
            max_output_tokens: *options.max_output_tokens(),
        })
        .build()
        .map_err(|e| {
            GeminiError::new(GeminiErrorKind::ClientCreation(format!(
                "Failed to build request: {}",
                e
            )))
        })
}

/// Pulls `candidates[0].content.parts[0].text` out of a raw response body.
pub fn from_response_body(body: &str) -> Result<String, GeminiError> {
    let response: GenerateContentResponse = serde_json::from_str(body).map_err(|e| {
        GeminiError::new(GeminiErrorKind::MalformedResponse(format!(
            "Response is not valid JSON: {}",
            e
        )))
    })?;
    from_response(&response)
}

/// Pulls the first candidate's text out of a decoded response.
pub fn from_response(response: &GenerateContentResponse) -> Result<String, GeminiError> {
    let candidate = response.candidates.first().ok_or_else(|| {
        let reason = response
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.clone())
            .map(|r| format!("No candidates in response (prompt blocked: {})", r))
            .unwrap_or_else(|| "No candidates in response".to_string());
        GeminiError::new(GeminiErrorKind::MalformedResponse(reason))
    })?;

    candidate
        .content
        .as_ref()
        .and_then(|content| content.parts.first())
        .and_then(|part| part.text.clone())
        .ok_or_else(|| {
            GeminiError::new(GeminiErrorKind::MalformedResponse(format!(
                "Candidate has no text part (finish reason: {})",
                candidate.finish_reason.as_deref().unwrap_or("unknown")
            )))
        })
}
