//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "RDECK_LOG";

const LOG_FILE_NAME: &str = "rdeck.log";
const DEFAULT_FILTER: &str = "recipe_deck=info,rdeck=info,warn";

/// Initialize the logging subsystem
///
/// Logs are written to `<data-local-dir>/recipe-deck/logs/` because the TUI
/// owns stdout. Log level is controlled by the `RDECK_LOG` environment variable.
///
/// # Examples
/// ```bash
/// RDECK_LOG=debug cargo run
/// RDECK_LOG=rdeck_source=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    let env_filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

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

    tracing::info!("Recipe Deck logging to {}", log_dir.display());

    Ok(())
}

/// Directory the rolling log files are written to
pub fn log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("recipe-deck").join("logs")
}
