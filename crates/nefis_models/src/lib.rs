//! LLM provider integration for the Nefis recipe assistant.

pub mod gemini;
mod retry;

pub use gemini::{
    CompletionOptions, GeminiClient, GeminiConfig, GeminiConfigBuilder, GeminiTransport,
    ReqwestTransport, TransportResponse,
};
pub use retry::RetryPolicy;
