use std::env;

use serde::{Deserialize, Serialize};

use self::ai::AiConfig;
use self::tooltip::TooltipConfig;
use self::vocabulary::VocabularyConfig;

pub mod ai;
pub mod tooltip;
pub mod vocabulary;

fn default_use_fallback_table() -> bool {
    true
}

fn default_viewport() -> (f32, f32) {
    (1024.0, 768.0)
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub ai: AiConfig,
    pub tooltip: TooltipConfig,
    pub vocabulary: VocabularyConfig,

    /// Consult the built-in sample words when the backend fails
    #[serde(default = "default_use_fallback_table")]
    pub use_fallback_table: bool,
    /// Initial viewport (width, height) until the surface reports one
    #[serde(default = "default_viewport")]
    pub viewport: (f32, f32),
}

impl Config {
    /// Defaults overridden by `GLOSSA_*` environment variables
    pub fn new() -> Self {
        let use_fallback_table = env::var("GLOSSA_FALLBACK_TABLE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default_use_fallback_table());

        Config {
            ai: AiConfig::new(),
            tooltip: TooltipConfig::default(),
            vocabulary: VocabularyConfig::new(),

            use_fallback_table,
            viewport: default_viewport(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            tooltip: TooltipConfig::default(),
            vocabulary: VocabularyConfig::default(),
            use_fallback_table: default_use_fallback_table(),
            viewport: default_viewport(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"ai": {"enabled": false}}"#).unwrap();

        assert!(!config.ai.enabled);
        assert_eq!(config.ai.timeout_ms, 8000);
        assert_eq!(config.tooltip.margin, 12.0);
        assert!(config.use_fallback_table);
        assert_eq!(
            config.vocabulary.storage_path.as_deref(),
            Some("glossa-storage.json")
        );
    }

    #[test]
    fn storage_path_can_be_disabled() {
        let config: Config =
            serde_json::from_str(r#"{"vocabulary": {"storage_path": null}}"#).unwrap();
        assert!(config.vocabulary.storage_path.is_none());
    }
}
