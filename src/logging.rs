//! Log file setup
//!
//! The form owns the terminal while it runs, so log lines go to a file in
//! the data directory rather than stderr.

use anyhow::{Context, Result};
use std::path::Path;
use tracing_appender::{
    non_blocking::{NonBlocking, WorkerGuard},
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "onboard-tui.log";

/// Open `onboard-tui.log` in `dir`, creating the directory if needed.
/// Lines are flushed when the returned guard is dropped.
pub fn file_writer(dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .with_context(|| format!("failed to open log file in {}", dir.display()))?;
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber. Keep the guard alive until exit.
pub fn init(dir: &Path) -> Result<WorkerGuard> {
    let (writer, guard) = file_writer(dir)?;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "onboard_tui=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false),
        )
        .init();
    Ok(guard)
}
