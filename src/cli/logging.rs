//! Tracing subscriber setup for each operation mode.
//!
//! The one-shot modes log to stderr. The interactive analyser owns the
//! terminal, so it logs to a daily-rolling file instead.

use std::fs;
use std::path::Path;

use reviewsense::AnalyzerError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// File name prefix for the interactive analyser's log files.
pub const LOG_FILE_PREFIX: &str = "reviewsense.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs a stderr log subscriber for the non-interactive modes.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}

/// Installs a file log subscriber writing under `log_dir`.
///
/// The returned guard flushes buffered lines when dropped and must be held
/// for as long as the program runs.
///
/// # Errors
///
/// Returns [`AnalyzerError::Io`] when `log_dir` cannot be created.
pub fn init_file_logging(log_dir: &Path) -> Result<WorkerGuard, AnalyzerError> {
    fs::create_dir_all(log_dir).map_err(|error| AnalyzerError::Io {
        message: format!("cannot create log directory {}: {error}", log_dir.display()),
    })?;

    let (writer, guard) = non_blocking(rolling::daily(log_dir, LOG_FILE_PREFIX));
    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()
        .ok();

    Ok(guard)
}
