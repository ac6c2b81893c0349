use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::geometry::{Rect, Size};

/// Shown for a section the backend did not provide
pub const PENDING_TEXT: &str = "(정보 준비 중)";
/// Shown in every field while a lookup is in flight
pub const LOADING_TEXT: &str = "불러오는 중...";
pub const UNAVAILABLE_MEANING: &str = "단어 정보를 가져올 수 없습니다.";

/// Position of a clickable unit in document order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(pub usize);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One clickable token of chapter text, punctuation included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextUnit {
    pub id: UnitId,
    pub raw: String,
}

/// Canonical form of a clicked word. Never empty.
///
/// Build it through `glossa_core::normalize` so the casing and punctuation
/// rules stay in one place.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupKey(String);

impl LookupKey {
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordSource {
    Ai,
    Cache,
    Fallback,
    #[default]
    Unavailable,
}

/// Four-field lookup result. Every field always holds displayable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionRecord {
    pub word: String,
    pub pronunciation: String,
    pub meaning: String,
    pub example: String,
    #[serde(default)]
    pub source: RecordSource,
}

impl DefinitionRecord {
    pub fn new(
        word: impl Into<String>,
        pronunciation: impl Into<String>,
        meaning: impl Into<String>,
        example: impl Into<String>,
        source: RecordSource,
    ) -> Self {
        Self {
            word: word.into(),
            pronunciation: pronunciation.into(),
            meaning: meaning.into(),
            example: example.into(),
            source,
        }
    }

    /// Placeholder rendered while the lookup is running
    pub fn loading(word: &str) -> Self {
        Self::new(word, LOADING_TEXT, LOADING_TEXT, LOADING_TEXT, RecordSource::Unavailable)
    }

    /// Generic "could not retrieve" record
    pub fn unavailable(word: &str) -> Self {
        Self::new(
            word,
            PENDING_TEXT,
            UNAVAILABLE_MEANING,
            PENDING_TEXT,
            RecordSource::Unavailable,
        )
    }

    pub fn with_source(mut self, source: RecordSource) -> Self {
        self.source = source;
        self
    }
}

/// A saved word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    #[serde(flatten)]
    pub record: DefinitionRecord,
    pub saved_at: DateTime<Utc>,
}

/// Identity of one tooltip `show` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    pub generation: u64,
    pub key: LookupKey,
    pub anchor: UnitId,
}

/// What a pointer press landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Unit(UnitId),
    Tooltip,
    SaveToggle,
    Elsewhere,
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Click {
        target: ClickTarget,
        anchor: Option<Rect>,
    },
    Scroll,
    Resize(Size),
    LoadChapter {
        text: String,
        title: String,
    },
    SwitchLevel(u8),
    LookupResolved {
        ticket: LookupTicket,
        record: DefinitionRecord,
    },
    LookupFailed {
        ticket: LookupTicket,
    },
    ListVocabulary,
    /// Dump the chapter and tooltip markup
    RenderMarkup,
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_key_rejects_blank() {
        assert!(LookupKey::new("").is_none());
        assert!(LookupKey::new("   ").is_none());
        assert_eq!(LookupKey::new("clock").unwrap().as_str(), "clock");
    }

    #[test]
    fn vocabulary_entry_serializes_flat() {
        let entry = VocabularyEntry {
            record: DefinitionRecord::new("clock", "[klɑːk]", "시계", "ex", RecordSource::Fallback),
            saved_at: DateTime::parse_from_rfc3339("2024-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["word"], "clock");
        assert_eq!(json["source"], "fallback");
        assert!(json.get("record").is_none());

        let back: VocabularyEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn records_without_source_default_to_unavailable() {
        let json = r#"{"word":"a","pronunciation":"b","meaning":"c","example":"d"}"#;
        let record: DefinitionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.source, RecordSource::Unavailable);
    }
}
