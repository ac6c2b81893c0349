mod client;
mod prompt;
mod response;

pub use client::HttpAiBackend;
pub use prompt::definition_prompt;
pub use response::extract_text;

use serde_json::json;

/// Definition provider interface
#[async_trait::async_trait]
pub trait AiBackend: Send + Sync {
    /// Ask for the definition of `word` using one request shape
    async fn define(&self, word: &str, shape: RequestShape) -> Result<AiResponse, AiError>;
}

/// Body layouts the backend has been seen to accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestShape {
    /// `{"contents": "<prompt>"}`
    Text,
    /// `{"contents": [{"role": "user", "parts": [{"text": "<prompt>"}]}]}`
    Structured,
}

impl RequestShape {
    /// Order in which shapes are attempted
    pub const ORDER: [RequestShape; 2] = [RequestShape::Text, RequestShape::Structured];

    pub fn body(&self, word: &str, prompt: &str) -> serde_json::Value {
        match self {
            RequestShape::Text => json!({
                "word": word,
                "contents": prompt,
            }),
            RequestShape::Structured => json!({
                "word": word,
                "contents": [{
                    "role": "user",
                    "parts": [{ "text": prompt }],
                }],
            }),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestShape::Text => "text",
            RequestShape::Structured => "structured",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Response had no text")]
    EmptyResponse,

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Authentication error")]
    AuthenticationError,
}
