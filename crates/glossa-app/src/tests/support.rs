use std::sync::Arc;

use async_trait::async_trait;
use glossa_ai::{AiBackend, AiError, AiResponse, RequestShape};
use glossa_config::Config;
use glossa_core::Chapter;
use glossa_lookup::{FallbackTable, LookupDispatcher};
use glossa_types::{AppEvent, UnitId};
use glossa_vocab::VocabularyStore;
use kanal::AsyncReceiver;
use tokio::sync::Semaphore;
use tokio::time::{Duration, timeout};

use crate::state::ReaderSession;

const CHAPTER: &str = "It was a bright cold day in April, and the clock was striking thirteen.\n\n\
                           Winston's chin was nuzzled into his breast ... to escape the vile wind.";

/// Backend that is always unreachable
pub struct FailingBackend;

#[async_trait]
impl AiBackend for FailingBackend {
    async fn define(&self, _word: &str, _shape: RequestShape) -> Result<AiResponse, AiError> {
        Err(AiError::ApiError("backend offline".to_string()))
    }
}

/// Answers immediately, except for `slow_word`, which waits for `release`
pub struct GatedBackend {
    slow_word: &'static str,
    gate: Semaphore,
}

impl GatedBackend {
    pub fn new(slow_word: &'static str) -> Arc<Self> {
        Arc::new(Self {
            slow_word,
            gate: Semaphore::new(0),
        })
    }

    pub fn release(&self) {
        self.gate.add_permits(1);
    }
}

#[async_trait]
impl AiBackend for GatedBackend {
    async fn define(&self, word: &str, _shape: RequestShape) -> Result<AiResponse, AiError> {
        if word == self.slow_word {
            let _permit = self.gate.acquire().await.map_err(|_| AiError::EmptyResponse)?;
        }

        Ok(AiResponse {
            text: format!("발음: [{word}]\n뜻: {word} 의 뜻\n예문: A {word} example."),
        })
    }
}

pub fn session(backend: Option<Arc<dyn AiBackend>>) -> ReaderSession {
    let dispatcher = Arc::new(LookupDispatcher::new(
        backend,
        Some(FallbackTable::with_defaults()),
    ));
    let mut session =
        ReaderSession::with_parts(Config::default(), dispatcher, VocabularyStore::in_memory());
    session.load_chapter(Chapter::from_plain_text("1984", CHAPTER));
    session
}

/// Id of the first unit whose raw text is `raw`
pub fn unit(session: &ReaderSession, raw: &str) -> UnitId {
    session
        .chapter()
        .and_then(|chapter| chapter.units().into_iter().find(|u| u.raw == raw).map(|u| u.id))
        .unwrap_or_else(|| panic!("no unit '{raw}'"))
}

pub async fn next_event(rx: &AsyncReceiver<AppEvent>) -> AppEvent {
    match timeout(Duration::from_secs(2), rx.recv()).await {
        Ok(Ok(event)) => event,
        Ok(Err(e)) => panic!("Channel error: {}", e),
        Err(_) => panic!("Timeout - lookup result never arrived!"),
    }
}
