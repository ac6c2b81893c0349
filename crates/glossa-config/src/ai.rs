use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "http://localhost:3000/api/gemini/define".to_string()
}

fn default_timeout_ms() -> u64 {
    8000
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct AiConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Definition endpoint of the reading server
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Sent as a bearer token when not empty
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl AiConfig {
    pub fn new() -> Self {
        let defaults = Self::default();

        let enabled = env::var("GLOSSA_AI_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.enabled);

        let api_url = env::var("GLOSSA_AI_URL").unwrap_or(defaults.api_url);
        let api_key = env::var("GLOSSA_AI_KEY").unwrap_or(defaults.api_key);

        let timeout_ms = env::var("GLOSSA_AI_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.timeout_ms);

        Self {
            enabled,
            api_url,
            api_key,
            timeout_ms,
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            api_url: default_api_url(),
            api_key: String::new(),
            timeout_ms: default_timeout_ms(),
        }
    }
}
