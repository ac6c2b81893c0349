use std::collections::HashMap;

use glossa_types::{DefinitionRecord, LookupKey, RecordSource};

/// Built-in definitions used when the backend cannot answer
pub struct FallbackTable {
    records: HashMap<String, DefinitionRecord>,
}

impl FallbackTable {
    /// Create empty table
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// Create with the words of the bundled sample chapter
    pub fn with_defaults() -> Self {
        let mut table = Self::new();

        let samples = [
            (
                "clock",
                "[klɑːk]",
                "시계 (벽시계, 탁상시계처럼 걸어 두거나 놓아 두는 시계)",
                "The clocks were striking thirteen. (시계들이 13시를 알리고 있었다.)",
            ),
            (
                "bright",
                "[braɪt]",
                "밝은, 화창한",
                "It was a bright cold day in April. (4월의 화창하고 추운 날이었다.)",
            ),
            (
                "cold",
                "[koʊld]",
                "추운, 차가운",
                "The cold wind swept the street. (차가운 바람이 거리를 휩쓸었다.)",
            ),
            (
                "april",
                "[ˈeɪprəl]",
                "4월",
                "It was a bright cold day in April. (4월의 화창하고 추운 날이었다.)",
            ),
            (
                "thirteen",
                "[ˌθɜːrˈtiːn]",
                "13, 열셋",
                "The clocks were striking thirteen. (시계들이 13시를 알리고 있었다.)",
            ),
            (
                "strike",
                "[straɪk]",
                "(시계가) 치다, 알리다",
                "The clock struck midnight. (시계가 자정을 알렸다.)",
            ),
        ];

        for (word, pronunciation, meaning, example) in samples {
            table.insert(DefinitionRecord::new(
                word,
                pronunciation,
                meaning,
                example,
                RecordSource::Fallback,
            ));
        }

        table
    }

    pub fn insert(&mut self, record: DefinitionRecord) {
        let record = record.with_source(RecordSource::Fallback);
        self.records.insert(record.word.to_lowercase(), record);
    }

    pub fn get(&self, key: &LookupKey) -> Option<DefinitionRecord> {
        self.records.get(key.as_str()).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for FallbackTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_bundled() {
        let table = FallbackTable::with_defaults();
        let record = table.get(&LookupKey::new("clock").unwrap()).unwrap();

        assert_eq!(record.pronunciation, "[klɑːk]");
        assert!(record.meaning.contains("시계"));
        assert!(record.example.contains("thirteen"));
        assert_eq!(record.source, RecordSource::Fallback);
    }

    #[test]
    fn winston_is_not_bundled() {
        let table = FallbackTable::with_defaults();
        assert!(table.get(&LookupKey::new("winston").unwrap()).is_none());
    }

    #[test]
    fn inserted_records_are_marked_fallback() {
        let mut table = FallbackTable::new();
        table.insert(DefinitionRecord::new("Gin", "[dʒɪn]", "진", "-", RecordSource::Ai));

        let record = table.get(&LookupKey::new("gin").unwrap()).unwrap();
        assert_eq!(record.source, RecordSource::Fallback);
        assert_eq!(table.len(), 1);
    }
}
