use std::path::{Path, PathBuf};

use glossa_types::{AppEvent, ClickTarget, Size, UnitId};
use kanal::AsyncSender;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio_util::sync::CancellationToken;

/// One line of driver input
#[derive(Debug, Clone)]
pub enum Input {
    Event(AppEvent),
    /// Chapter text to read from disk
    Chapter(PathBuf),
}

pub fn parse_command(line: &str) -> Result<Input, String> {
    let mut parts = line.split_whitespace();
    let Some(command) = parts.next() else {
        return Err("empty command".to_string());
    };
    let arg = parts.next();

    let click = |target| {
        Input::Event(AppEvent::Click {
            target,
            anchor: None,
        })
    };

    let input = match (command, arg) {
        ("click", Some(unit)) => {
            let unit = unit
                .parse()
                .map_err(|_| format!("invalid unit index: {unit}"))?;
            click(ClickTarget::Unit(UnitId(unit)))
        }
        ("outside", None) => click(ClickTarget::Elsewhere),
        ("tooltip", None) => click(ClickTarget::Tooltip),
        ("toggle", None) => click(ClickTarget::SaveToggle),
        ("scroll", None) => Input::Event(AppEvent::Scroll),
        ("chapter", Some(path)) => Input::Chapter(PathBuf::from(path)),
        ("level", Some(level)) => {
            let level = level
                .parse()
                .map_err(|_| format!("invalid level: {level}"))?;
            Input::Event(AppEvent::SwitchLevel(level))
        }
        ("resize", Some(width)) => {
            let height = parts.next().ok_or("usage: resize <width> <height>")?;
            let (Ok(width), Ok(height)) = (width.parse(), height.parse()) else {
                return Err(format!("invalid size: {width} {height}"));
            };
            Input::Event(AppEvent::Resize(Size::new(width, height)))
        }
        ("list", None) => Input::Event(AppEvent::ListVocabulary),
        ("html", None) => Input::Event(AppEvent::RenderMarkup),
        ("quit", None) => Input::Event(AppEvent::Quit),
        _ => return Err(format!("unknown command: {}", line.trim())),
    };

    Ok(input)
}

/// Title (the file stem) and text of a chapter file. Both `--chapter` and
/// the `chapter` command read through here.
pub async fn read_chapter(path: &Path) -> anyhow::Result<(String, String)> {
    tracing::info!("Loading chapter from file: {}", path.display());
    let text = tokio::fs::read_to_string(path).await?;
    let title = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok((title, text))
}

/// Line-driven input source on stdin
pub async fn input_io(cancel: CancellationToken, event_tx: AsyncSender<AppEvent>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    tracing::info!("Reading commands from stdin");
    loop {
        let line = tokio::select! {
            _ = cancel.cancelled() => break,
            line = lines.next_line() => line?,
        };

        let Some(line) = line else {
            tracing::info!("stdin closed");
            event_tx.send(AppEvent::Quit).await?;
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let event = match parse_command(&line) {
            Ok(Input::Event(event)) => event,
            Ok(Input::Chapter(path)) => match read_chapter(&path).await {
                Ok((title, text)) => AppEvent::LoadChapter { text, title },
                Err(e) => {
                    tracing::error!("Failed to read chapter {}: {}", path.display(), e);
                    continue;
                }
            },
            Err(e) => {
                tracing::warn!("{}", e);
                continue;
            }
        };

        event_tx.send(event).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[tokio::test]
    async fn chapter_title_comes_from_file_stem() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chapter-one.txt");
        std::fs::write(&path, "It was a bright cold day.").unwrap();

        let (title, text) = read_chapter(&path).await.unwrap();
        assert_eq!(title, "chapter-one");
        assert_eq!(text, "It was a bright cold day.");
    }

    #[tokio::test]
    async fn missing_chapter_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(read_chapter(&temp_dir.path().join("absent.txt")).await.is_err());
    }

    #[test]
    fn click_carries_no_anchor() {
        let Ok(Input::Event(AppEvent::Click { target, anchor })) = parse_command("click 12") else {
            panic!("expected click");
        };
        assert_eq!(target, ClickTarget::Unit(UnitId(12)));
        assert!(anchor.is_none());
    }

    #[test]
    fn toggle_is_a_click_on_the_save_button() {
        assert!(matches!(
            parse_command("toggle"),
            Ok(Input::Event(AppEvent::Click {
                target: ClickTarget::SaveToggle,
                ..
            }))
        ));
    }

    #[test]
    fn chapter_and_level() {
        assert!(matches!(parse_command("chapter ch1.txt"), Ok(Input::Chapter(p)) if p == Path::new("ch1.txt")));
        assert!(matches!(
            parse_command("level 3"),
            Ok(Input::Event(AppEvent::SwitchLevel(3)))
        ));
    }

    #[test]
    fn html_dumps_markup() {
        assert!(matches!(
            parse_command("html"),
            Ok(Input::Event(AppEvent::RenderMarkup))
        ));
        assert!(parse_command("html now").is_err());
    }

    #[test]
    fn resize_needs_both_dimensions() {
        assert!(matches!(
            parse_command("resize 640 480"),
            Ok(Input::Event(AppEvent::Resize(size))) if size == Size::new(640.0, 480.0)
        ));
        assert!(parse_command("resize 640").is_err());
    }

    #[test]
    fn malformed_commands_are_rejected() {
        assert!(parse_command("click").is_err());
        assert!(parse_command("click x").is_err());
        assert!(parse_command("level high").is_err());
        assert!(parse_command("dance").is_err());
    }
}
