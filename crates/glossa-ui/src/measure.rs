use glossa_config::tooltip::TooltipConfig;
use glossa_types::Size;

use crate::state::TooltipNode;

/// Measures the rendered size of a tooltip after its content changes
pub trait Measure: Send {
    fn measure(&self, node: &TooltipNode) -> Size;
}

/// Size estimate from average glyph metrics, wrapping at `max_width`
#[derive(Debug, Clone)]
pub struct EstimatedMeasure {
    pub char_width: f32,
    pub line_height: f32,
    pub padding: f32,
    pub max_width: f32,
}

impl EstimatedMeasure {
    pub fn from_config(config: &TooltipConfig) -> Self {
        Self {
            char_width: config.char_width,
            line_height: config.line_height,
            padding: config.padding,
            max_width: config.max_width,
        }
    }

    /// Hangul and other wide scripts take roughly two columns
    fn text_width(&self, text: &str) -> f32 {
        let columns: usize = text
            .chars()
            .map(|c| if (c as u32) >= 0x1100 { 2 } else { 1 })
            .sum();
        columns as f32 * self.char_width
    }
}

impl Measure for EstimatedMeasure {
    fn measure(&self, node: &TooltipNode) -> Size {
        let inner_max = (self.max_width - self.padding * 2.0).max(self.char_width);

        let mut widest: f32 = 0.0;
        let mut rows = 0.0;
        for line in node.lines() {
            let width = self.text_width(line);
            widest = widest.max(width.min(inner_max));
            rows += (width / inner_max).ceil().max(1.0);
        }

        if node.show_toggle {
            rows += 1.0;
        }

        Size::new(
            widest + self.padding * 2.0,
            rows * self.line_height + self.padding * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use glossa_types::DefinitionRecord;

    use super::*;

    fn measure() -> EstimatedMeasure {
        EstimatedMeasure::from_config(&TooltipConfig::default())
    }

    #[test]
    fn long_meaning_wraps_within_max_width() {
        let mut record = DefinitionRecord::loading("clock");
        record.meaning = "시계, 벽시계, 탁상시계 등 시간을 재는 기계를 두루 이르는 말".repeat(3);
        let node = TooltipNode::new(record);

        let size = measure().measure(&node);

        assert!(size.width <= 320.0);
        assert!(size.height > 4.0 * 20.0 + 24.0);
    }

    #[test]
    fn toggle_row_adds_height() {
        let mut node = TooltipNode::new(DefinitionRecord::unavailable("clock"));
        let without = measure().measure(&node);
        node.show_toggle = true;
        let with = measure().measure(&node);

        assert_eq!(with.height - without.height, 20.0);
    }
}
