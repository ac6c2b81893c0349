use glossa_types::{TextUnit, UnitId};

use crate::chapter::{Chapter, Node};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Maximal non-whitespace run, punctuation attached
    Word,
    /// Whitespace run kept verbatim
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub kind: SegmentKind,
}

/// Split text into alternating word and whitespace runs.
///
/// Concatenating the segment texts always reproduces `text`.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut current: Option<SegmentKind> = None;

    for (idx, ch) in text.char_indices() {
        let kind = if ch.is_whitespace() {
            SegmentKind::Space
        } else {
            SegmentKind::Word
        };

        match current {
            Some(prev) if prev == kind => {}
            Some(prev) => {
                segments.push(Segment {
                    text: &text[start..idx],
                    kind: prev,
                });
                start = idx;
                current = Some(kind);
            }
            None => current = Some(kind),
        }
    }

    if let Some(kind) = current {
        segments.push(Segment {
            text: &text[start..],
            kind,
        });
    }

    segments
}

/// Wrap every word of the chapter in a clickable unit.
///
/// Returns the number of units created. A chapter that was already
/// tokenized is left untouched and `0` is returned.
pub fn tokenize(chapter: &mut Chapter) -> usize {
    if chapter.is_processed() {
        tracing::debug!("Chapter '{}' already tokenized", chapter.title);
        return 0;
    }

    let mut next = 0;
    let paragraphs = std::mem::take(chapter.paragraphs_mut());
    *chapter.paragraphs_mut() = wrap_nodes(paragraphs, &mut next);
    chapter.mark_processed();

    tracing::debug!("Tokenized '{}' into {} units", chapter.title, next);
    next
}

fn wrap_nodes(nodes: Vec<Node>, next: &mut usize) -> Vec<Node> {
    let mut wrapped = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            Node::Text(text) => {
                for seg in segment(&text) {
                    match seg.kind {
                        SegmentKind::Word => {
                            wrapped.push(Node::Unit(TextUnit {
                                id: UnitId(*next),
                                raw: seg.text.to_string(),
                            }));
                            *next += 1;
                        }
                        SegmentKind::Space => wrapped.push(Node::Text(seg.text.to_string())),
                    }
                }
            }
            Node::Element { tag, children } => wrapped.push(Node::Element {
                tag,
                children: wrap_nodes(children, next),
            }),
            unit @ Node::Unit(_) => wrapped.push(unit),
        }
    }

    wrapped
}
