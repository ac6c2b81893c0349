use std::sync::Arc;
use std::time::Instant;

use glossa_lookup::LookupDispatcher;
use glossa_types::{AppEvent, DefinitionRecord, LookupTicket};
use kanal::AsyncSender;

use crate::state::ReaderSession;

/// Resolve `ticket` off the event loop and report back over `events_tx`.
///
/// A lookup task that dies reports `LookupFailed` instead.
pub fn spawn_lookup(
    dispatcher: Arc<LookupDispatcher>,
    ticket: LookupTicket,
    events_tx: AsyncSender<AppEvent>,
) {
    tokio::spawn(async move {
        let key = ticket.key.clone();
        let lookup = tokio::spawn(async move { dispatcher.resolve(&key).await });

        let event = match lookup.await {
            Ok(record) => AppEvent::LookupResolved { ticket, record },
            Err(e) => {
                tracing::error!("Lookup task for '{}' failed: {}", ticket.key, e);
                AppEvent::LookupFailed { ticket }
            }
        };

        if let Err(e) = events_tx.send(event).await {
            tracing::warn!("Failed to deliver lookup result: {}", e);
        }
    });
}

pub fn handle_lookup_resolved(
    session: &mut ReaderSession,
    ticket: LookupTicket,
    record: DefinitionRecord,
) -> bool {
    let source = record.source;
    let applied = session.tooltip.apply(&ticket, record, &session.vocabulary);
    if applied {
        tracing::debug!("Showing '{}' ({:?})", ticket.key, source);
    }
    applied
}

pub fn handle_lookup_failed(session: &mut ReaderSession, ticket: LookupTicket) -> bool {
    session.tooltip.fail(&ticket, Instant::now())
}
