use glossa_core::escape_html as escape;
use glossa_types::{DefinitionRecord, Point, Rect, Size, UnitId};

/// Class of the tooltip element
pub const TOOLTIP_CLASS: &str = "glossa-tooltip";
/// Present while the tooltip is shown
pub const VISIBLE_CLASS: &str = "visible";
pub const ERROR_CLASS: &str = "error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipPhase {
    Hidden,
    Loading,
    Populated,
    /// Short-lived notice for a lookup that produced nothing
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveIcon {
    Filled,
    Outline,
}

impl SaveIcon {
    pub fn for_saved(saved: bool) -> Self {
        if saved {
            SaveIcon::Filled
        } else {
            SaveIcon::Outline
        }
    }
}

/// Clicked unit and its viewport-relative box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub unit: UnitId,
    pub rect: Rect,
}

/// The floating tooltip element. Created once, then reused.
#[derive(Debug, Clone)]
pub struct TooltipNode {
    pub classes: Vec<&'static str>,
    pub record: DefinitionRecord,
    pub save_icon: SaveIcon,
    pub show_toggle: bool,
    pub message: Option<String>,
    pub position: Point,
    pub size: Size,
}

impl TooltipNode {
    pub(crate) fn new(record: DefinitionRecord) -> Self {
        Self {
            classes: vec![TOOLTIP_CLASS],
            record,
            save_icon: SaveIcon::Outline,
            show_toggle: false,
            message: None,
            position: Point::default(),
            size: Size::default(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(&class)
    }

    pub(crate) fn add_class(&mut self, class: &'static str) {
        if !self.has_class(class) {
            self.classes.push(class);
        }
    }

    pub(crate) fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| *c != class);
    }

    pub fn is_visible(&self) -> bool {
        self.has_class(VISIBLE_CLASS)
    }

    /// Text lines in display order
    pub fn lines(&self) -> Vec<&str> {
        match &self.message {
            Some(message) => vec![message.as_str()],
            None => vec![
                self.record.word.as_str(),
                self.record.pronunciation.as_str(),
                self.record.meaning.as_str(),
                self.record.example.as_str(),
            ],
        }
    }

    /// Markup for the tooltip element as currently laid out
    pub fn render_html(&self) -> String {
        let mut html = format!(
            "<div class=\"{}\" style=\"left: {}px; top: {}px;\">",
            self.classes.join(" "),
            self.position.x.round(),
            self.position.y.round()
        );

        match &self.message {
            Some(message) => {
                html.push_str(&format!("<p class=\"tooltip-error\">{}</p>", escape(message)));
            }
            None => {
                html.push_str(&format!(
                    "<div class=\"tooltip-word\">{}</div>\
                     <div class=\"tooltip-pronunciation\">{}</div>\
                     <div class=\"tooltip-meaning\">{}</div>\
                     <div class=\"tooltip-example\">{}</div>",
                    escape(&self.record.word),
                    escape(&self.record.pronunciation),
                    escape(&self.record.meaning),
                    escape(&self.record.example),
                ));
                if self.show_toggle {
                    let icon = match self.save_icon {
                        SaveIcon::Filled => "bookmark-filled",
                        SaveIcon::Outline => "bookmark-outline",
                    };
                    html.push_str(&format!(
                        "<button class=\"save-toggle\" data-icon=\"{icon}\"></button>"
                    ));
                }
            }
        }

        html.push_str("</div>");
        html
    }
}
