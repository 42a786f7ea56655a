//! Google Gemini `generateContent` integration.
//!
//! A single-turn text client: prompt in, first candidate's text out, with a
//! bounded retry around each exchange.

mod client;
mod config;
pub mod conversions;
mod dto;
mod options;
mod transport;

pub use client::GeminiClient;
pub use config::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig, GeminiConfigBuilder};
pub use dto::{
    Candidate, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
    PromptFeedback,
};
pub use options::CompletionOptions;
pub use transport::{GeminiTransport, ReqwestTransport, TransportResponse};
