use glossa_types::AppEvent;
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::io::input_io;
use crate::state::ReaderSession;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    /// Input commands and lookup results, consumed by the event loop
    pub events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    /// Rendered frames for the display task
    pub display: (AsyncSender<String>, AsyncReceiver<String>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            events: kanal::bounded_async(64),
            display: kanal::bounded_async(256),
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new() -> Self {
        Self {
            channels: ChannelSet::new(),
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self, session: ReaderSession) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            session,
            self.channels.events.1.clone(),
            self.channels.events.0.clone(),
            self.channels.display.0.clone(),
            self.cancel_token.child_token(),
        ));

        // Display
        tasks.spawn(ui_loop(
            self.channels.display.1.clone(),
            self.cancel_token.child_token(),
        ));

        // Input
        tasks.spawn(input_io(
            self.cancel_token.child_token(),
            self.channels.events.0.clone(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
