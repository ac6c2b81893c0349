use std::time::{Duration, Instant};

use glossa_config::tooltip::TooltipConfig;
use glossa_types::{ClickTarget, DefinitionRecord, LookupKey, LookupTicket, RecordSource, Size};
use glossa_vocab::{VocabularyError, VocabularyStore};

use crate::measure::{EstimatedMeasure, Measure};
use crate::position::place;
use crate::state::{Anchor, ERROR_CLASS, SaveIcon, TooltipNode, TooltipPhase, VISIBLE_CLASS};

/// Shown by the error variant
pub const LOOKUP_FAILED_TEXT: &str = "단어 정보를 불러오지 못했습니다.";

/// Owns the single floating tooltip and its lifecycle.
///
/// Every `show` bumps a generation counter. Results carrying an older
/// ticket are dropped, so only the latest click can fill the tooltip.
pub struct TooltipController {
    config: TooltipConfig,
    viewport: Size,
    measure: Box<dyn Measure>,
    node: Option<TooltipNode>,
    phase: TooltipPhase,
    anchor: Option<Anchor>,
    key: Option<LookupKey>,
    generation: u64,
    error_deadline: Option<Instant>,
}

impl TooltipController {
    pub fn new(config: TooltipConfig, viewport: Size) -> Self {
        let measure = Box::new(EstimatedMeasure::from_config(&config));
        Self {
            config,
            viewport,
            measure,
            node: None,
            phase: TooltipPhase::Hidden,
            anchor: None,
            key: None,
            generation: 0,
            error_deadline: None,
        }
    }

    pub fn with_measure(mut self, measure: Box<dyn Measure>) -> Self {
        self.measure = measure;
        self
    }

    pub fn phase(&self) -> TooltipPhase {
        self.phase
    }

    pub fn node(&self) -> Option<&TooltipNode> {
        self.node.as_ref()
    }

    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    pub fn current_key(&self) -> Option<&LookupKey> {
        self.key.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.phase != TooltipPhase::Hidden
    }

    /// Open the tooltip in its loading state for `key` at `anchor`
    pub fn show(&mut self, anchor: Anchor, key: LookupKey) -> LookupTicket {
        self.generation += 1;
        self.anchor = Some(anchor);
        self.key = Some(key.clone());
        self.error_deadline = None;
        self.phase = TooltipPhase::Loading;

        let node = self.node.get_or_insert_with(|| {
            tracing::debug!("Creating tooltip node");
            TooltipNode::new(DefinitionRecord::loading(key.as_str()))
        });
        node.record = DefinitionRecord::loading(key.as_str());
        node.message = None;
        node.show_toggle = false;
        node.remove_class(ERROR_CLASS);
        node.add_class(VISIBLE_CLASS);
        self.reposition();

        tracing::debug!(
            "Tooltip loading '{}' at unit {} (generation {})",
            key,
            anchor.unit,
            self.generation
        );

        LookupTicket {
            generation: self.generation,
            key,
            anchor: anchor.unit,
        }
    }

    fn is_current(&self, ticket: &LookupTicket) -> bool {
        ticket.generation == self.generation && self.phase == TooltipPhase::Loading
    }

    /// Fill the tooltip with `record`. Returns `false` when the ticket is
    /// stale or the tooltip was dismissed in the meantime.
    pub fn apply(
        &mut self,
        ticket: &LookupTicket,
        record: DefinitionRecord,
        store: &VocabularyStore,
    ) -> bool {
        if !self.is_current(ticket) {
            tracing::debug!(
                "Discarding result for '{}' (generation {}, current {})",
                ticket.key,
                ticket.generation,
                self.generation
            );
            return false;
        }

        let saved = store.contains(&ticket.key);
        let Some(node) = self.node.as_mut() else {
            return false;
        };
        node.record = record;
        node.show_toggle = true;
        node.save_icon = SaveIcon::for_saved(saved);
        self.phase = TooltipPhase::Populated;
        self.reposition();

        true
    }

    /// Switch to the error variant, which hides itself once `tick` passes
    /// the configured delay
    pub fn fail(&mut self, ticket: &LookupTicket, now: Instant) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        let Some(node) = self.node.as_mut() else {
            return false;
        };
        node.message = Some(LOOKUP_FAILED_TEXT.to_string());
        node.show_toggle = false;
        node.add_class(ERROR_CLASS);
        self.phase = TooltipPhase::Error;
        self.error_deadline = Some(now + Duration::from_millis(self.config.error_dismiss_ms));
        self.reposition();

        tracing::warn!("Lookup for '{}' produced nothing", ticket.key);
        true
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some(deadline) = self.error_deadline
            && now >= deadline
        {
            self.hide();
        }
    }

    /// Remove the visible class. The node is kept for the next `show`.
    pub fn hide(&mut self) {
        if let Some(node) = self.node.as_mut() {
            node.remove_class(VISIBLE_CLASS);
            node.remove_class(ERROR_CLASS);
            node.message = None;
        }
        self.phase = TooltipPhase::Hidden;
        self.error_deadline = None;
    }

    /// Pointer press anywhere in the document. Returns whether it dismissed
    /// the tooltip.
    pub fn on_click(&mut self, target: ClickTarget) -> bool {
        if !self.is_visible() {
            return false;
        }

        let exempt = match target {
            ClickTarget::Tooltip | ClickTarget::SaveToggle => true,
            ClickTarget::Unit(unit) => self.anchor.is_some_and(|a| a.unit == unit),
            ClickTarget::Elsewhere => false,
        };
        if exempt {
            return false;
        }

        self.hide();
        true
    }

    pub fn on_scroll(&mut self) {
        self.hide();
    }

    /// Chapter or level change
    pub fn on_navigate(&mut self) {
        self.hide();
        self.anchor = None;
        self.key = None;
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        if self.is_visible() {
            self.reposition();
        }
    }

    /// Save or unsave the displayed word. Only the toggle icon changes.
    ///
    /// Returns `None` when nothing is displayed. On a persistence error the
    /// icon still reflects the in-memory store.
    pub fn toggle_save(
        &mut self,
        store: &mut VocabularyStore,
    ) -> Result<Option<SaveIcon>, VocabularyError> {
        if self.phase != TooltipPhase::Populated {
            return Ok(None);
        }
        let (Some(key), Some(node)) = (self.key.as_ref(), self.node.as_mut()) else {
            return Ok(None);
        };

        let result = if store.contains(key) {
            store.remove(key).map(|_| ())
        } else if node.record.source == RecordSource::Unavailable {
            tracing::debug!("Not saving placeholder record for '{}'", key);
            return Ok(None);
        } else {
            store.add(node.record.clone())
        };

        node.save_icon = SaveIcon::for_saved(store.contains(key));
        tracing::info!("'{}' saved: {}", key, store.contains(key));

        result.map(|_| Some(node.save_icon))
    }

    fn reposition(&mut self) {
        let (Some(anchor), Some(node)) = (self.anchor, self.node.as_mut()) else {
            return;
        };

        node.size = self.measure.measure(node);
        node.position = place(
            anchor.rect,
            node.size,
            self.viewport,
            self.config.margin,
            self.config.gap,
        );
    }
}
