//! File logging.
//!
//! The TUI owns stdout, so every event goes to a daily-rolling file under
//! the user's data directory instead.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_FILTER: &str = "novacrust=info";

const LOG_FILE_PREFIX: &str = "novacrust.log";

/// Keeps the background writer alive. Dropping it flushes pending lines.
pub struct LoggingGuard {
    _guard: WorkerGuard,
}

/// Where log files are written: the user's local data directory, or the
/// temp directory when there is none.
#[must_use]
pub fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("novacrust")
        .join("logs")
}

fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = log_dir();
    if std::fs::create_dir_all(&dir).is_ok() {
        return Ok(dir);
    }
    let fallback = std::env::temp_dir().join("novacrust").join("logs");
    std::fs::create_dir_all(&fallback)?;
    Ok(fallback)
}

/// Installs the global subscriber.
///
/// Returns `None` when no log directory can be created or a subscriber is
/// already installed; the app then runs without logs.
pub fn init() -> Option<LoggingGuard> {
    let log_dir = ensure_log_dir().ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true),
    );

    if subscriber.try_init().is_err() {
        return None;
    }

    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!(panic = %panic_info, "panic");
        previous_hook(panic_info);
    }));

    tracing::info!(log_dir = %log_dir.display(), "tracing initialized");

    Some(LoggingGuard { _guard: guard })
}
