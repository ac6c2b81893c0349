use glossa_types::{DefinitionRecord, PENDING_TEXT, RecordSource};
use once_cell::sync::Lazy;
use regex::Regex;

/// A labeled line, with optional list marker and markdown emphasis:
/// `- **발음:** [klɑːk]`, `2) Meaning: clock`, `예문 ： ...`
static LABEL_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s*(?:[-*•]\s+|\d+[.)]\s*)?(?:\*\*|__)?\s*(발음|pronunciation|뜻|의미|meaning|예문|예시|example)\s*(?:\*\*|__)?\s*[:：]\s*(?:\*\*|__)?\s*(.*)$",
    )
    .unwrap()
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Pronunciation,
    Meaning,
    Example,
}

impl Section {
    fn from_label(label: &str) -> Option<Self> {
        match label.to_lowercase().as_str() {
            "발음" | "pronunciation" => Some(Section::Pronunciation),
            "뜻" | "의미" | "meaning" => Some(Section::Meaning),
            "예문" | "예시" | "example" => Some(Section::Example),
            _ => None,
        }
    }
}

/// Sections found in the backend prose
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSections {
    pub pronunciation: Option<String>,
    pub meaning: Option<String>,
    pub example: Option<String>,
}

impl ParsedSections {
    pub fn is_complete(&self) -> bool {
        self.pronunciation.is_some() && self.meaning.is_some() && self.example.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.pronunciation.is_none() && self.meaning.is_none() && self.example.is_none()
    }

    /// Missing sections become the pending placeholder
    pub fn into_record(self, word: &str) -> DefinitionRecord {
        let or_pending = |field: Option<String>| field.unwrap_or_else(|| PENDING_TEXT.to_string());

        DefinitionRecord::new(
            word,
            or_pending(self.pronunciation),
            or_pending(self.meaning),
            or_pending(self.example),
            RecordSource::Ai,
        )
    }

    fn slot(&mut self, section: Section) -> &mut Option<String> {
        match section {
            Section::Pronunciation => &mut self.pronunciation,
            Section::Meaning => &mut self.meaning,
            Section::Example => &mut self.example,
        }
    }
}

fn flush(parsed: &mut ParsedSections, current: Option<(Section, String)>) {
    if let Some((section, value)) = current {
        let value = clean(&value);
        let slot = parsed.slot(section);
        if slot.is_none() && !value.is_empty() {
            *slot = Some(value);
        }
    }
}

fn clean(value: &str) -> String {
    value
        .trim()
        .trim_end_matches("**")
        .trim_end_matches("__")
        .trim()
        .to_string()
}

/// Find the pronunciation, meaning and example sections in semi-structured
/// prose. Sections may come in any order; a section continues on following
/// unlabeled lines. The first occurrence of a label wins.
pub fn parse_sections(text: &str) -> ParsedSections {
    let mut parsed = ParsedSections::default();
    let mut current: Option<(Section, String)> = None;

    for line in text.lines() {
        if let Some(caps) = LABEL_LINE.captures(line)
            && let Some(section) = Section::from_label(&caps[1])
        {
            flush(&mut parsed, current.take());
            current = Some((section, caps[2].to_string()));
            continue;
        }

        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some((_, value)) = current.as_mut() {
            if !value.trim().is_empty() {
                value.push(' ');
            }
            value.push_str(line);
        }
    }
    flush(&mut parsed, current.take());

    parsed
}
