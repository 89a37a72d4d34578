//! Terminal client entry point.
mod app;
mod config;
mod input;
mod message;
mod presentation;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::App;
use brawler_content::ContentFactory;
use brawler_core::Session;
use config::CliConfig;
use presentation::terminal::{self, TerminalGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    setup_logging(config.session_id.as_deref())?;

    let factory = match &config.data_dir {
        Some(dir) => ContentFactory::new(dir),
        None => ContentFactory::embedded(),
    };
    let game_config = factory
        .load_config()
        .context("Failed to load game configuration")?;
    let roster = factory
        .load_roster()
        .context("Failed to load variant roster")?;
    let session = Session::new(&roster, game_config);

    let (mut tui, key_release) = terminal::init()?;
    let _guard = TerminalGuard::new(key_release);

    App::new(session, &config, key_release).run(&mut tui).await
}

/// Setup logging to a per-session file. The TUI owns the terminal, so nothing
/// goes to stderr.
fn setup_logging(session_id: Option<&str>) -> Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let session_id = match session_id {
        Some(id) => id.to_string(),
        None => {
            let timestamp = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|elapsed| elapsed.as_secs())
                .unwrap_or_default();
            format!("session_{}", timestamp)
        }
    };

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "brawler.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    tracing::info!(session = %session_id, "logging initialized");
    tracing::info!("Log file: {}/brawler.log", session_log_dir.display());

    Ok(())
}

/// Platform cache directory for logs, e.g. `~/.cache/brawler/logs` on Linux.
fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "brawler")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("brawler"))
        .join("logs")
}
