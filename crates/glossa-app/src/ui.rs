use glossa_core::render_html;
use glossa_ui::{SaveIcon, TooltipPhase};
use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;

use crate::state::ReaderSession;

/// Writes frames produced by the event loop to stdout
pub async fn ui_loop(
    display_rx: AsyncReceiver<String>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        tokio::select! {
            _ = cancel.cancelled() => break,
            frame = display_rx.recv() => {
                println!("{}", frame?);
            }
        }
    }

    Ok(())
}

/// Text view of the tooltip as it currently stands
pub fn render_frame(session: &ReaderSession) -> String {
    let Some(node) = session.tooltip.node() else {
        return "[tooltip] none".to_string();
    };

    match session.tooltip.phase() {
        TooltipPhase::Hidden => "[tooltip] hidden".to_string(),
        TooltipPhase::Error => format!(
            "[tooltip] error at ({:.0}, {:.0}): {}",
            node.position.x,
            node.position.y,
            node.message.as_deref().unwrap_or_default()
        ),
        phase @ (TooltipPhase::Loading | TooltipPhase::Populated) => {
            let mut frame = format!(
                "[tooltip] {} at ({:.0}, {:.0})\n  {}\n  {}\n  {}\n  {}",
                if phase == TooltipPhase::Loading { "loading" } else { "shown" },
                node.position.x,
                node.position.y,
                node.record.word,
                node.record.pronunciation,
                node.record.meaning,
                node.record.example,
            );
            if node.show_toggle {
                let icon = match node.save_icon {
                    SaveIcon::Filled => "[★ saved]",
                    SaveIcon::Outline => "[☆ save]",
                };
                frame.push_str(&format!("\n  {icon}"));
            }
            frame
        }
    }
}

pub fn render_vocabulary(session: &ReaderSession) -> String {
    let store = &session.vocabulary;
    if store.is_empty() {
        return "[vocabulary] empty".to_string();
    }

    let mut frame = format!("[vocabulary] {} words", store.len());
    for entry in store.list() {
        frame.push_str(&format!(
            "\n  {} {} {} ({})",
            entry.record.word,
            entry.record.pronunciation,
            entry.record.meaning,
            entry.saved_at.format("%Y-%m-%d %H:%M")
        ));
    }
    frame
}

/// Chapter container markup, followed by the tooltip element when one exists
pub fn render_markup(session: &ReaderSession) -> String {
    let mut frame = match session.chapter() {
        Some(chapter) => render_html(chapter),
        None => "[markup] no chapter".to_string(),
    };
    if let Some(node) = session.tooltip.node() {
        frame.push('\n');
        frame.push_str(&node.render_html());
    }
    frame
}
