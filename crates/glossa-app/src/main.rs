use std::path::PathBuf;

use atty::Stream;
use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

mod controller;
mod events;
mod io;
mod layout;
mod profile;
mod state;
mod ui;

#[cfg(test)]
mod tests;

use self::controller::AppController;
use self::state::ReaderSession;

#[derive(Parser, Debug)]
#[command(name = "glossa", about = "Read a chapter and look up words", version)]
struct Args {
    /// Plain-text chapter to open at startup
    #[arg(long)]
    chapter: Option<PathBuf>,

    /// Config file (defaults to ./config.json when present)
    #[arg(long)]
    config: Option<PathBuf>,
}

/// Logs go to stderr, leaving stdout to the reader frames. JSON when
/// stderr is not a terminal.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if atty::is(Stream::Stderr) {
        builder.init();
    } else {
        builder.json().init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_logging();

    let args = Args::parse();
    let config = profile::load_config(args.config.as_deref())?;

    let mut session = ReaderSession::new(config);
    if let Some(path) = &args.chapter {
        let (title, text) = io::read_chapter(path).await?;
        session.load_text(title, &text)?;
    }

    let controller = AppController::new();
    let mut tasks = controller.spawn_tasks(session);

    tokio::select! {
        result = signal::ctrl_c() => {
            result?;
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("Task exited"),
                Ok(Err(e)) => tracing::error!("Task failed: {e}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::warn!("Task exited with error during shutdown: {e}");
        }
    }

    Ok(())
}
