//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "gloss.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/gloss/logs/` (platform data dir).
/// Log level is controlled by the `GLOSS_LOG` environment variable.
/// Nothing is written to the terminal, so the TUI stays clean.
///
/// # Examples
/// ```bash
/// GLOSS_LOG=debug gloss browse
/// GLOSS_LOG=gloss_core=trace gloss show "Gradient Descent"
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info for our crates, allow override via GLOSS_LOG
    let env_filter = EnvFilter::try_from_env("GLOSS_LOG").unwrap_or_else(|_| {
        EnvFilter::new("gloss=info,gloss_core=info,gloss_app=info,gloss_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("gloss starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("gloss").join("logs"))
}
