use chrono::Utc;
use glossa_types::{DefinitionRecord, LookupKey, VocabularyEntry};

use crate::error::VocabularyError;
use crate::storage::{MemoryStorage, Storage};

/// Storage namespace holding the saved words
pub const NAMESPACE: &str = "vocabulary";

/// The user's saved words, most recent first, at most one per word
pub struct VocabularyStore {
    storage: Box<dyn Storage>,
    entries: Vec<VocabularyEntry>,
}

impl VocabularyStore {
    /// Load saved words from `storage`. Unreadable data is logged and
    /// replaced on the next write.
    pub fn open(storage: Box<dyn Storage>) -> Self {
        let mut entries: Vec<VocabularyEntry> = match storage.get(NAMESPACE) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::error!("Failed to parse saved vocabulary: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };

        entries.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        let mut seen = std::collections::HashSet::new();
        entries.retain(|entry| seen.insert(entry.record.word.to_lowercase()));

        tracing::info!("Loaded {} saved words", entries.len());
        Self { storage, entries }
    }

    pub fn in_memory() -> Self {
        Self::open(Box::new(MemoryStorage::new()))
    }

    /// Save `record`, replacing an earlier entry for the same word
    pub fn add(&mut self, record: DefinitionRecord) -> Result<(), VocabularyError> {
        let word = record.word.to_lowercase();
        self.entries
            .retain(|entry| entry.record.word.to_lowercase() != word);

        self.entries.insert(
            0,
            VocabularyEntry {
                record,
                saved_at: Utc::now(),
            },
        );

        tracing::debug!("Saved '{}' ({} words)", word, self.entries.len());
        self.persist()
    }

    /// Returns whether an entry was removed. Removing an unsaved word is a no-op.
    pub fn remove(&mut self, key: &LookupKey) -> Result<bool, VocabularyError> {
        let before = self.entries.len();
        self.entries.retain(|entry| !matches_key(entry, key));

        if self.entries.len() == before {
            return Ok(false);
        }

        tracing::debug!("Removed '{}' ({} words)", key, self.entries.len());
        self.persist()?;
        Ok(true)
    }

    pub fn contains(&self, key: &LookupKey) -> bool {
        self.entries.iter().any(|entry| matches_key(entry, key))
    }

    pub fn get(&self, key: &LookupKey) -> Option<&VocabularyEntry> {
        self.entries.iter().find(|entry| matches_key(entry, key))
    }

    /// Saved words, most recent first
    pub fn list(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn persist(&mut self) -> Result<(), VocabularyError> {
        let raw = serde_json::to_string(&self.entries)?;
        self.storage.set(NAMESPACE, raw)?;
        Ok(())
    }
}

fn matches_key(entry: &VocabularyEntry, key: &LookupKey) -> bool {
    entry.record.word.to_lowercase() == key.as_str()
}
