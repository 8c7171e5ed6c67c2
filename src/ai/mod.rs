//! Generative-model client layer.
//!
//! A trait-based abstraction over the external structured-generation service
//! (recipe JSON + dish images), with a real Gemini client and a fake for
//! tests. The credential is resolved per call by the owning service and
//! passed in, so clients hold no ambient key state.

mod fake;
mod gemini;
pub mod prompts;
mod schema;

pub use fake::FakeClient;
pub use gemini::GeminiClient;
pub use schema::recipe_response_schema;

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for generative-model calls.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API returned error: {status} - {message}")]
    ApiError { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("Rate limited, retry after {retry_after_secs:?} seconds")]
    RateLimited { retry_after_secs: Option<u64> },
}

/// An inline image payload returned by the model, still base64-encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    /// e.g. "image/png".
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

/// Trait for generative-model clients.
///
/// Implementations should be stateless apart from connection reuse; they make
/// the API call and return the model's payload without interpreting it.
#[async_trait]
pub trait GenerativeClient: Send + Sync + fmt::Debug {
    /// Request structured JSON output constrained by `response_schema`.
    /// Returns the raw text of the response, which the caller parses.
    async fn generate_structured(
        &self,
        api_key: &str,
        system_instruction: &str,
        prompt: &str,
        response_schema: &serde_json::Value,
    ) -> Result<String, GenerateError>;

    /// Request an image for the given prompt. `Ok(None)` means the model
    /// produced no inline image payload, which is not an error.
    async fn generate_image(
        &self,
        api_key: &str,
        prompt: &str,
    ) -> Result<Option<InlineImage>, GenerateError>;

    /// Model used for structured generation.
    fn model_name(&self) -> &str;
}
