use std::sync::Arc;

use glossa_config::Config;
use glossa_core::{Chapter, CoreError, tokenize};
use glossa_lookup::LookupDispatcher;
use glossa_types::Size;
use glossa_ui::TooltipController;
use glossa_vocab::{JsonFileStorage, VocabularyStore};

use crate::layout::FlowLayout;

/// Everything one reader screen owns. Lives inside the event loop task.
pub struct ReaderSession {
    pub tooltip: TooltipController,
    pub vocabulary: VocabularyStore,
    pub dispatcher: Arc<LookupDispatcher>,
    pub layout: FlowLayout,
    pub level: u8,
    chapter: Option<Chapter>,
    /// Untokenized copy, re-rendered on level switch
    source: Option<Chapter>,
}

impl ReaderSession {
    pub fn new(config: Config) -> Self {
        let dispatcher = Arc::new(LookupDispatcher::from_config(&config));

        let vocabulary = match &config.vocabulary.storage_path {
            Some(path) => {
                let storage = JsonFileStorage::open_or_empty(path);
                tracing::info!("Vocabulary storage: {}", storage.path().display());
                VocabularyStore::open(Box::new(storage))
            }
            None => {
                tracing::warn!("No storage path configured, saved words are kept in memory");
                VocabularyStore::in_memory()
            }
        };

        Self::with_parts(config, dispatcher, vocabulary)
    }

    pub fn with_parts(
        config: Config,
        dispatcher: Arc<LookupDispatcher>,
        vocabulary: VocabularyStore,
    ) -> Self {
        let (width, height) = config.viewport;
        let viewport = Size::new(width, height);

        Self {
            tooltip: TooltipController::new(config.tooltip.clone(), viewport),
            layout: FlowLayout::new(&config.tooltip, viewport),
            vocabulary,
            dispatcher,
            level: 1,
            chapter: None,
            source: None,
        }
    }

    pub fn chapter(&self) -> Option<&Chapter> {
        self.chapter.as_ref()
    }

    /// Replace the current chapter. Returns the number of clickable units.
    pub fn load_chapter(&mut self, chapter: Chapter) -> usize {
        self.tooltip.on_navigate();
        self.source = Some(chapter.clone());
        self.render(chapter)
    }

    /// Parse and load chapter text. Text without a paragraph is rejected
    /// and the current chapter stays.
    pub fn load_text(&mut self, title: String, text: &str) -> Result<usize, CoreError> {
        let chapter = Chapter::parse(title, text)?;
        Ok(self.load_chapter(chapter))
    }

    /// Re-render the current chapter for `level`. Units from the previous
    /// pass are discarded.
    pub fn switch_level(&mut self, level: u8) -> usize {
        self.tooltip.on_navigate();
        self.level = level;

        match self.source.clone() {
            Some(chapter) => self.render(chapter),
            None => 0,
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.layout.set_viewport(viewport);
        self.tooltip.set_viewport(viewport);
    }

    fn render(&mut self, mut chapter: Chapter) -> usize {
        let units = tokenize(&mut chapter);
        tracing::info!(
            "Rendered '{}' at level {}: {} units",
            chapter.title,
            self.level,
            units
        );
        self.chapter = Some(chapter);
        units
    }
}
