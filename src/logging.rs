//! Tracing setup: human-readable stderr output plus an optional log file.
//!
//! The log file target is an explicit argument rather than process-global
//! state; the returned guard owns the non-blocking file writer and must stay
//! alive for the duration of the program so buffered lines get flushed.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Keeps the file writer alive. Dropping it flushes remaining log lines.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the tracing subscriber.
///
/// Filter defaults to `info`, overridable via `RUST_LOG`. When `log_file` is
/// given, log lines are appended there through a non-blocking writer in
/// addition to stderr.
pub fn init(log_file: Option<&Path>) -> io::Result<LoggingGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let file_guard = match log_file {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let file_layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_timer(fmt::time::UtcTime::rfc_3339());
            registry.with(file_layer).init();
            Some(guard)
        }
        None => {
            registry.init();
            None
        }
    };

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
