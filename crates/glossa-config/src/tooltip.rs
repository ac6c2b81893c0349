use serde::{Deserialize, Serialize};

fn default_margin() -> f32 {
    12.0
}

fn default_gap() -> f32 {
    8.0
}

fn default_max_width() -> f32 {
    320.0
}

fn default_char_width() -> f32 {
    8.0
}

fn default_line_height() -> f32 {
    20.0
}

fn default_padding() -> f32 {
    12.0
}

fn default_error_dismiss_ms() -> u64 {
    3000
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct TooltipConfig {
    /// Minimum distance from every viewport edge
    #[serde(default = "default_margin")]
    pub margin: f32,
    /// Space between the anchor and the tooltip
    #[serde(default = "default_gap")]
    pub gap: f32,
    #[serde(default = "default_max_width")]
    pub max_width: f32,
    /// Average glyph advance used to estimate the tooltip size
    #[serde(default = "default_char_width")]
    pub char_width: f32,
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    #[serde(default = "default_padding")]
    pub padding: f32,
    /// Lifetime of the error variant
    #[serde(default = "default_error_dismiss_ms")]
    pub error_dismiss_ms: u64,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            margin: default_margin(),
            gap: default_gap(),
            max_width: default_max_width(),
            char_width: default_char_width(),
            line_height: default_line_height(),
            padding: default_padding(),
            error_dismiss_ms: default_error_dismiss_ms(),
        }
    }
}
