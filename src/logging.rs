//! Logging configuration using tracing with file appender.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILE: &str = "folio.log";
const FALLBACK_LEVEL: &str = "info";

/// Initialize tracing with file output.
///
/// The terminal belongs to the TUI, so events go to a file. Returns a guard
/// that must be held for the duration of the program; dropping it flushes
/// remaining logs.
///
/// In debug builds, span enter/exit events are logged as well.
pub fn init_logging(log_path: Option<&Path>, level: Option<&str>) -> WorkerGuard {
    let log_path = log_path.unwrap_or(Path::new(DEFAULT_LOG_FILE));
    let level = level.unwrap_or(FALLBACK_LEVEL);

    let parent = log_path.parent().unwrap_or(Path::new("."));
    let filename = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new(DEFAULT_LOG_FILE));

    let file_appender = tracing_appender::rolling::never(parent, filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let (filter, rejected) = level_filter(level);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false);

    #[cfg(debug_assertions)]
    let file_layer = {
        use tracing_subscriber::fmt::format::FmtSpan;
        file_layer.with_span_events(FmtSpan::ENTER | FmtSpan::CLOSE)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    if let Some(level) = rejected {
        tracing::warn!(level, "invalid log level, falling back to {FALLBACK_LEVEL}");
    }

    guard
}

/// Filter for the crate at `level`, or at the fallback level when `level`
/// does not parse. The rejected level is returned for reporting once the
/// subscriber is installed.
fn level_filter(level: &str) -> (EnvFilter, Option<&str>) {
    match EnvFilter::try_new(format!("folio={level}")) {
        Ok(filter) => (filter, None),
        Err(_) => (
            EnvFilter::new(format!("folio={FALLBACK_LEVEL}")),
            Some(level),
        ),
    }
}
