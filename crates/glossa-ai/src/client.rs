use std::time::Duration;

use async_trait::async_trait;
use glossa_config::ai::AiConfig;

use crate::prompt::definition_prompt;
use crate::response::extract_text;
use crate::{AiBackend, AiError, AiResponse, RequestShape};

/// Definition endpoint of the reading server
#[derive(Clone)]
pub struct HttpAiBackend {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl HttpAiBackend {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self, AiError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_key,
            api_url,
        })
    }

    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        Self::new(
            config.api_key.clone(),
            config.api_url.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }
}

#[async_trait]
impl AiBackend for HttpAiBackend {
    async fn define(&self, word: &str, shape: RequestShape) -> Result<AiResponse, AiError> {
        let prompt = definition_prompt(word);

        let mut request = self
            .client
            .post(&self.api_url)
            .json(&shape.body(word, &prompt));

        if !self.api_key.is_empty() {
            request = request.bearer_auth(&self.api_key);
        }

        let response = request.send().await?;

        if response.status() == 429 {
            return Err(AiError::RateLimitExceeded);
        }

        if response.status() == 401 || response.status() == 403 {
            return Err(AiError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(AiError::ApiError(format!("HTTP {}", response.status())));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ApiError(format!("Failed to parse response: {}", e)))?;

        let text = extract_text(&json).ok_or(AiError::EmptyResponse)?;

        tracing::debug!(
            "Backend answered '{}' with {} chars ({} shape)",
            word,
            text.len(),
            shape.as_str()
        );

        Ok(AiResponse { text })
    }
}
