use std::collections::HashMap;
use std::collections::hash_map::Entry;

use glossa_types::{DefinitionRecord, LookupKey};
use parking_lot::RwLock;

/// Process-lifetime definition cache. The first record stored for a key is
/// kept; later inserts for the same key are ignored.
#[derive(Default)]
pub struct LookupCache {
    entries: RwLock<HashMap<LookupKey, DefinitionRecord>>,
}

impl LookupCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &LookupKey) -> Option<DefinitionRecord> {
        self.entries.read().get(key).cloned()
    }

    /// Returns `false` when the key was already cached
    pub fn insert(&self, key: LookupKey, record: DefinitionRecord) -> bool {
        match self.entries.write().entry(key) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(record);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glossa_types::RecordSource;

    fn record(meaning: &str) -> DefinitionRecord {
        DefinitionRecord::new("clock", "[klɑːk]", meaning, "-", RecordSource::Ai)
    }

    #[test]
    fn first_write_wins() {
        let cache = LookupCache::new();
        let key = LookupKey::new("clock").unwrap();

        assert!(cache.insert(key.clone(), record("시계")));
        assert!(!cache.insert(key.clone(), record("벽시계")));

        assert_eq!(cache.get(&key).unwrap().meaning, "시계");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn miss_returns_none() {
        let cache = LookupCache::new();
        let key = LookupKey::new("winston").unwrap();
        assert!(cache.get(&key).is_none());
        assert!(cache.is_empty());
    }
}
