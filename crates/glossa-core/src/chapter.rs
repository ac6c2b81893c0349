use glossa_types::{TextUnit, UnitId};

use crate::error::CoreError;

/// Node of the chapter container tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Element { tag: String, children: Vec<Node> },
    Unit(TextUnit),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element {
            tag: tag.into(),
            children,
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Unit(unit) => out.push_str(&unit.raw),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    fn collect_units<'a>(&'a self, out: &mut Vec<&'a TextUnit>) {
        match self {
            Node::Unit(unit) => out.push(unit),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_units(out);
                }
            }
            Node::Text(_) => {}
        }
    }
}

/// Container holding the paragraphs of one chapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub title: String,
    paragraphs: Vec<Node>,
    processed: bool,
}

impl Chapter {
    pub fn new(title: impl Into<String>, paragraphs: Vec<Node>) -> Self {
        Self {
            title: title.into(),
            paragraphs,
            processed: false,
        }
    }

    /// Paragraphs are separated by blank lines
    pub fn from_plain_text(title: impl Into<String>, text: &str) -> Self {
        let mut paragraphs = Vec::new();
        let mut current: Vec<&str> = Vec::new();

        for line in text.lines() {
            if line.trim().is_empty() {
                if !current.is_empty() {
                    paragraphs.push(Node::element("p", vec![Node::text(current.join("\n"))]));
                    current.clear();
                }
            } else {
                current.push(line);
            }
        }

        if !current.is_empty() {
            paragraphs.push(Node::element("p", vec![Node::text(current.join("\n"))]));
        }

        Self::new(title, paragraphs)
    }

    /// Like `from_plain_text`, but a chapter without a single paragraph
    /// is an error
    pub fn parse(title: impl Into<String>, text: &str) -> Result<Self, CoreError> {
        let chapter = Self::from_plain_text(title, text);
        if chapter.paragraphs.is_empty() {
            return Err(CoreError::EmptyChapter(chapter.title));
        }

        Ok(chapter)
    }

    /// Processed marker, set once the chapter has been tokenized
    pub fn is_processed(&self) -> bool {
        self.processed
    }

    pub(crate) fn mark_processed(&mut self) {
        self.processed = true;
    }

    pub fn paragraphs(&self) -> &[Node] {
        &self.paragraphs
    }

    pub(crate) fn paragraphs_mut(&mut self) -> &mut Vec<Node> {
        &mut self.paragraphs
    }

    /// All units in document order
    pub fn units(&self) -> Vec<&TextUnit> {
        let mut units = Vec::new();
        for paragraph in &self.paragraphs {
            paragraph.collect_units(&mut units);
        }
        units
    }

    pub fn unit(&self, id: UnitId) -> Option<&TextUnit> {
        // Ids are dense and ordered, so the index is the id
        self.units().into_iter().nth(id.0).filter(|u| u.id == id)
    }

    /// Character content, paragraphs separated by a blank line
    pub fn text_content(&self) -> String {
        let mut parts = Vec::with_capacity(self.paragraphs.len());
        for paragraph in &self.paragraphs {
            let mut text = String::new();
            paragraph.collect_text(&mut text);
            parts.push(text);
        }
        parts.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_splits_on_blank_lines() {
        let chapter = Chapter::from_plain_text("one", "First line\nsame paragraph\n\n\n  \nSecond");
        assert_eq!(chapter.paragraphs().len(), 2);
        assert_eq!(chapter.text_content(), "First line\nsame paragraph\n\nSecond");
        assert!(!chapter.is_processed());
    }

    #[test]
    fn blank_text_is_an_empty_chapter() {
        assert!(matches!(
            Chapter::parse("blank", "\n  \n\t\n"),
            Err(CoreError::EmptyChapter(title)) if title == "blank"
        ));
        assert_eq!(Chapter::parse("one", "word").unwrap().paragraphs().len(), 1);
    }

    #[test]
    fn unit_lookup_out_of_range() {
        let mut chapter = Chapter::from_plain_text("one", "a b");
        crate::tokenize(&mut chapter);
        assert!(chapter.unit(UnitId(1)).is_some());
        assert!(chapter.unit(UnitId(2)).is_none());
    }

    #[test]
    fn untokenized_chapter_has_no_units() {
        let chapter = Chapter::from_plain_text("one", "a b c");
        assert!(chapter.units().is_empty());
    }
}
