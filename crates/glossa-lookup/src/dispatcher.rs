use std::sync::Arc;

use glossa_ai::{AiBackend, HttpAiBackend, RequestShape};
use glossa_config::Config;
use glossa_types::{DefinitionRecord, LookupKey, RecordSource};

use crate::cache::LookupCache;
use crate::fallback::FallbackTable;
use crate::parse::{ParsedSections, parse_sections};

/// Resolves lookup keys to definitions: cache, then backend, then the
/// fallback table. Never fails; errors degrade to fallback content.
pub struct LookupDispatcher {
    backend: Option<Arc<dyn AiBackend>>,
    cache: LookupCache,
    fallback: Option<FallbackTable>,
}

impl LookupDispatcher {
    pub fn new(backend: Option<Arc<dyn AiBackend>>, fallback: Option<FallbackTable>) -> Self {
        Self {
            backend,
            cache: LookupCache::new(),
            fallback,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let backend: Option<Arc<dyn AiBackend>> = if config.ai.enabled {
            match HttpAiBackend::from_config(&config.ai) {
                Ok(backend) => Some(Arc::new(backend)),
                Err(e) => {
                    tracing::error!("Failed to build AI backend client: {}", e);
                    None
                }
            }
        } else {
            tracing::warn!("AI lookups disabled, using fallback table only");
            None
        };

        let fallback = config.use_fallback_table.then(FallbackTable::with_defaults);

        Self::new(backend, fallback)
    }

    /// Cached record for `key`, without touching the network
    pub fn cached(&self, key: &LookupKey) -> Option<DefinitionRecord> {
        self.cache
            .get(key)
            .map(|record| record.with_source(RecordSource::Cache))
    }

    /// Answer without suspending: a cache hit, or the offline answer when
    /// no backend is configured
    pub fn resolve_now(&self, key: &LookupKey) -> Option<DefinitionRecord> {
        if let Some(record) = self.cached(key) {
            return Some(record);
        }

        if self.backend.is_none() {
            return Some(self.degrade(key));
        }

        None
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub async fn resolve(&self, key: &LookupKey) -> DefinitionRecord {
        if let Some(record) = self.cached(key) {
            tracing::debug!("Cache hit for '{}'", key);
            return record;
        }

        let Some(backend) = self.backend.as_deref() else {
            return self.degrade(key);
        };

        let Some(sections) = self.ask_backend(backend, key).await else {
            return self.degrade(key);
        };

        let complete = sections.is_complete();
        let record = sections.into_record(key.as_str());

        if complete {
            self.cache.insert(key.clone(), record.clone());
        } else {
            tracing::debug!("Partial definition for '{}', not caching", key);
        }

        record
    }

    /// Try each request shape in order; the first response with at least
    /// one recognizable section wins
    async fn ask_backend(&self, backend: &dyn AiBackend, key: &LookupKey) -> Option<ParsedSections> {
        for shape in RequestShape::ORDER {
            match backend.define(key.as_str(), shape).await {
                Ok(response) => {
                    let sections = parse_sections(&response.text);
                    if !sections.is_empty() {
                        return Some(sections);
                    }
                    tracing::warn!(
                        "Unparsable definition for '{}' ({} shape)",
                        key,
                        shape.as_str()
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        "Definition request for '{}' failed ({} shape): {}",
                        key,
                        shape.as_str(),
                        e
                    );
                }
            }
        }

        None
    }

    fn degrade(&self, key: &LookupKey) -> DefinitionRecord {
        if let Some(record) = self.fallback.as_ref().and_then(|table| table.get(key)) {
            tracing::info!("Using fallback definition for '{}'", key);
            return record;
        }

        tracing::info!("No definition available for '{}'", key);
        DefinitionRecord::unavailable(key.as_str())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use glossa_ai::{AiError, AiResponse};
    use glossa_types::{PENDING_TEXT, UNAVAILABLE_MEANING};
    use parking_lot::Mutex;

    use super::*;

    const COMPLETE: &str = "발음: [klɑːk]\n뜻: 시계\n예문: The clock ticked.";

    /// Answers from a script, one entry per request
    #[derive(Default)]
    struct ScriptedBackend {
        script: Mutex<VecDeque<Option<&'static str>>>,
        calls: Mutex<Vec<RequestShape>>,
    }

    impl ScriptedBackend {
        fn new(script: &[Option<&'static str>]) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.iter().copied().collect()),
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<RequestShape> {
            self.calls.lock().clone()
        }
    }

    #[async_trait]
    impl AiBackend for ScriptedBackend {
        async fn define(&self, _word: &str, shape: RequestShape) -> Result<AiResponse, AiError> {
            self.calls.lock().push(shape);
            match self.script.lock().pop_front().flatten() {
                Some(text) => Ok(AiResponse {
                    text: text.to_string(),
                }),
                None => Err(AiError::ApiError("scripted failure".to_string())),
            }
        }
    }

    fn key(word: &str) -> LookupKey {
        LookupKey::new(word).unwrap()
    }

    fn dispatcher(backend: &Arc<ScriptedBackend>) -> LookupDispatcher {
        LookupDispatcher::new(
            Some(backend.clone() as Arc<dyn AiBackend>),
            Some(FallbackTable::with_defaults()),
        )
    }

    #[tokio::test]
    async fn cached_record_skips_backend() {
        let backend = ScriptedBackend::new(&[Some(COMPLETE)]);
        let dispatcher = dispatcher(&backend);

        let first = dispatcher.resolve(&key("clock")).await;
        let second = dispatcher.resolve(&key("clock")).await;

        assert_eq!(first.source, RecordSource::Ai);
        assert_eq!(second.source, RecordSource::Cache);
        assert_eq!(first.with_source(RecordSource::Cache), second);
        assert_eq!(backend.calls(), vec![RequestShape::Text]);
        assert_eq!(dispatcher.cache_len(), 1);
    }

    #[tokio::test]
    async fn structured_shape_is_tried_after_text_fails() {
        let backend = ScriptedBackend::new(&[None, Some(COMPLETE)]);
        let dispatcher = dispatcher(&backend);

        let record = dispatcher.resolve(&key("clock")).await;

        assert_eq!(record.meaning, "시계");
        assert_eq!(
            backend.calls(),
            vec![RequestShape::Text, RequestShape::Structured]
        );
    }

    #[tokio::test]
    async fn unparsable_text_tries_next_shape() {
        let backend = ScriptedBackend::new(&[Some("I cannot answer."), Some(COMPLETE)]);
        let dispatcher = dispatcher(&backend);

        let record = dispatcher.resolve(&key("clock")).await;

        assert_eq!(record.source, RecordSource::Ai);
        assert_eq!(backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn partial_parse_is_returned_but_not_cached() {
        let backend = ScriptedBackend::new(&[Some("뜻: 시계"), Some(COMPLETE)]);
        let dispatcher = dispatcher(&backend);

        let partial = dispatcher.resolve(&key("clock")).await;
        assert_eq!(partial.meaning, "시계");
        assert_eq!(partial.pronunciation, PENDING_TEXT);
        assert_eq!(dispatcher.cache_len(), 0);

        let full = dispatcher.resolve(&key("clock")).await;
        assert_eq!(full.pronunciation, "[klɑːk]");
        assert_eq!(dispatcher.cache_len(), 1);
    }

    #[tokio::test]
    async fn failure_uses_fallback_and_stays_retryable() {
        let backend = ScriptedBackend::new(&[None, None, Some(COMPLETE)]);
        let dispatcher = dispatcher(&backend);

        let fallback = dispatcher.resolve(&key("clock")).await;
        assert_eq!(fallback.source, RecordSource::Fallback);
        assert_eq!(fallback.pronunciation, "[klɑːk]");
        assert_eq!(dispatcher.cache_len(), 0);

        let retried = dispatcher.resolve(&key("clock")).await;
        assert_eq!(retried.source, RecordSource::Ai);
        assert_eq!(retried.example, "The clock ticked.");
        assert_eq!(backend.calls().len(), 3);
    }

    #[tokio::test]
    async fn unknown_word_degrades_to_unavailable() {
        let backend = ScriptedBackend::new(&[None, None]);
        let dispatcher = dispatcher(&backend);

        let record = dispatcher.resolve(&key("winston")).await;

        assert_eq!(record.word, "winston");
        assert_eq!(record.source, RecordSource::Unavailable);
        assert_eq!(record.meaning, UNAVAILABLE_MEANING);
        assert_eq!(record.pronunciation, PENDING_TEXT);
        assert_eq!(record.example, PENDING_TEXT);
    }

    #[tokio::test]
    async fn without_backend_fallback_answers_directly() {
        let dispatcher = LookupDispatcher::new(None, Some(FallbackTable::with_defaults()));

        let record = dispatcher.resolve(&key("clock")).await;

        assert_eq!(record.source, RecordSource::Fallback);
        assert!(record.example.contains("thirteen"));
    }

    #[test]
    fn resolve_now_needs_cache_or_no_backend() {
        let backend = ScriptedBackend::new(&[]);
        assert!(dispatcher(&backend).resolve_now(&key("clock")).is_none());

        let offline = LookupDispatcher::new(None, Some(FallbackTable::with_defaults()));
        let record = offline.resolve_now(&key("clock")).unwrap();
        assert_eq!(record.source, RecordSource::Fallback);
        assert_eq!(offline.cache_len(), 0);
    }

    #[tokio::test]
    async fn without_fallback_table_everything_is_unavailable() {
        let dispatcher = LookupDispatcher::new(None, None);
        let record = dispatcher.resolve(&key("clock")).await;
        assert_eq!(record.source, RecordSource::Unavailable);
    }

    #[test]
    fn disabled_config_builds_without_backend() {
        let mut config = Config::default();
        config.ai.enabled = false;
        let dispatcher = LookupDispatcher::from_config(&config);
        assert!(dispatcher.backend.is_none());
        assert!(dispatcher.fallback.is_some());
    }
}
