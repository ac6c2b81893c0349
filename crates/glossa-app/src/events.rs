use std::time::{Duration, Instant};

use glossa_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio_util::sync::CancellationToken;

use crate::state::ReaderSession;
use crate::ui::{render_frame, render_markup, render_vocabulary};

pub mod click;
pub mod lookup;

use click::handle_click;
use lookup::{handle_lookup_failed, handle_lookup_resolved};

/// Cadence for expiring the tooltip error variant
const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// App's main loop. Sole owner of the session.
pub async fn event_loop(
    mut session: ReaderSession,
    events_rx: AsyncReceiver<AppEvent>,
    events_tx: AsyncSender<AppEvent>,
    display_tx: AsyncSender<String>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let mut ticker = tokio::time::interval(TICK);

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("[EVENT_LOOP] Cancelled");
                break;
            }
            _ = ticker.tick() => {
                let was_visible = session.tooltip.is_visible();
                session.tooltip.tick(Instant::now());
                if was_visible && !session.tooltip.is_visible() {
                    display_tx.send(render_frame(&session)).await?;
                }
            }
            event = events_rx.recv() => {
                let event = event?;
                tracing::debug!(
                    "[EVENT_LOOP] Event received: {:?}",
                    std::mem::discriminant(&event)
                );

                let render: fn(&ReaderSession) -> String = match event {
                    AppEvent::ListVocabulary => render_vocabulary,
                    AppEvent::RenderMarkup => render_markup,
                    _ => render_frame,
                };
                let flow = handle_events(&mut session, &events_tx, event)?;
                if flow == Flow::Quit {
                    tracing::info!("[EVENT_LOOP] Quit requested");
                    cancel.cancel();
                    break;
                }

                display_tx.send(render(&session)).await?;
            }
        }
    }

    Ok(())
}

pub fn handle_events(
    session: &mut ReaderSession,
    events_tx: &AsyncSender<AppEvent>,
    event: AppEvent,
) -> anyhow::Result<Flow> {
    match event {
        AppEvent::Click { target, anchor } => {
            handle_click(session, events_tx, target, anchor);
        }
        AppEvent::Scroll => {
            session.tooltip.on_scroll();
        }
        AppEvent::Resize(size) => {
            session.set_viewport(size);
        }
        AppEvent::LoadChapter { text, title } => {
            if let Err(e) = session.load_text(title, &text) {
                tracing::warn!("Keeping current chapter: {}", e);
            }
        }
        AppEvent::SwitchLevel(level) => {
            session.switch_level(level);
        }
        AppEvent::LookupResolved { ticket, record } => {
            handle_lookup_resolved(session, ticket, record);
        }
        AppEvent::LookupFailed { ticket } => {
            handle_lookup_failed(session, ticket);
        }
        AppEvent::ListVocabulary => {
            tracing::debug!("{} saved words", session.vocabulary.len());
        }
        AppEvent::RenderMarkup => {
            tracing::debug!("Rendering markup for level {}", session.level);
        }
        AppEvent::Quit => return Ok(Flow::Quit),
    }

    Ok(Flow::Continue)
}
