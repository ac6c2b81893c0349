use glossa_core::normalize;
use glossa_types::{AppEvent, ClickTarget, Rect, UnitId};
use glossa_ui::Anchor;
use kanal::AsyncSender;

use crate::events::lookup::spawn_lookup;
use crate::state::ReaderSession;

pub fn handle_click(
    session: &mut ReaderSession,
    events_tx: &AsyncSender<AppEvent>,
    target: ClickTarget,
    anchor: Option<Rect>,
) {
    if session.tooltip.on_click(target) {
        tracing::debug!("Tooltip dismissed by click on {:?}", target);
    }

    match target {
        ClickTarget::Unit(id) => handle_unit_click(session, events_tx, id, anchor),
        ClickTarget::SaveToggle => handle_save_toggle(session),
        ClickTarget::Tooltip | ClickTarget::Elsewhere => {}
    }
}

fn handle_unit_click(
    session: &mut ReaderSession,
    events_tx: &AsyncSender<AppEvent>,
    id: UnitId,
    anchor: Option<Rect>,
) {
    let Some(chapter) = session.chapter() else {
        tracing::warn!("Click on unit {} with no chapter loaded", id);
        return;
    };
    let Some(unit) = chapter.unit(id) else {
        tracing::warn!("Click on unknown unit {}", id);
        return;
    };

    let Some(key) = normalize(&unit.raw) else {
        tracing::debug!("'{}' normalizes to nothing, ignoring click", unit.raw);
        return;
    };

    let rect = anchor
        .or_else(|| session.layout.unit_rect(chapter, id))
        .unwrap_or_default();

    tracing::debug!("Click on '{}' -> '{}'", unit.raw, key);
    let ticket = session.tooltip.show(Anchor { unit: id, rect }, key);

    if let Some(record) = session.dispatcher.resolve_now(&ticket.key) {
        tracing::debug!("Answered '{}' without waiting", ticket.key);
        session.tooltip.apply(&ticket, record, &session.vocabulary);
        return;
    }

    spawn_lookup(session.dispatcher.clone(), ticket, events_tx.clone());
}

fn handle_save_toggle(session: &mut ReaderSession) {
    if let Err(e) = session.tooltip.toggle_save(&mut session.vocabulary) {
        tracing::error!("Failed to persist vocabulary: {}", e);
    }
}
