use glossa_config::tooltip::TooltipConfig;
use glossa_core::Chapter;
use glossa_types::{Rect, Size, UnitId};

/// Left and right page padding
const PAGE_PADDING: f32 = 24.0;

/// Stand-in for the rendered page: units flow left to right and wrap at
/// the viewport width. Used to anchor the tooltip when the input source
/// does not report a bounding box.
#[derive(Debug, Clone)]
pub struct FlowLayout {
    char_width: f32,
    line_height: f32,
    viewport: Size,
}

impl FlowLayout {
    pub fn new(config: &TooltipConfig, viewport: Size) -> Self {
        Self {
            char_width: config.char_width,
            line_height: config.line_height,
            viewport,
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn unit_rect(&self, chapter: &Chapter, id: UnitId) -> Option<Rect> {
        let line_end = (self.viewport.width - PAGE_PADDING).max(PAGE_PADDING + self.char_width);
        let mut x = PAGE_PADDING;
        let mut y = PAGE_PADDING;

        for unit in chapter.units() {
            let width = unit.raw.chars().count() as f32 * self.char_width;
            if x > PAGE_PADDING && x + width > line_end {
                x = PAGE_PADDING;
                y += self.line_height;
            }

            if unit.id == id {
                return Some(Rect::new(x, y, width, self.line_height));
            }
            x += width + self.char_width;
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use glossa_core::tokenize;

    use super::*;

    fn chapter(text: &str) -> Chapter {
        let mut chapter = Chapter::from_plain_text("test", text);
        tokenize(&mut chapter);
        chapter
    }

    #[test]
    fn units_flow_and_wrap() {
        let layout = FlowLayout::new(&TooltipConfig::default(), Size::new(200.0, 600.0));
        let chapter = chapter("It was a bright cold day in April");

        let first = layout.unit_rect(&chapter, UnitId(0)).unwrap();
        assert_eq!(first, Rect::new(24.0, 24.0, 16.0, 20.0));

        let second = layout.unit_rect(&chapter, UnitId(1)).unwrap();
        assert_eq!(second.left, 24.0 + 16.0 + 8.0);

        let last = layout.unit_rect(&chapter, UnitId(7)).unwrap();
        assert!(last.top > first.top);
    }

    #[test]
    fn unknown_unit_has_no_rect() {
        let layout = FlowLayout::new(&TooltipConfig::default(), Size::new(800.0, 600.0));
        assert!(layout.unit_rect(&chapter("one two"), UnitId(9)).is_none());
    }
}
