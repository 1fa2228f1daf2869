//! Tracing setup for the `carpark` binary.
//!
//! Human-readable events go to stderr. With `--log-file`, the same events are
//! also written as JSON lines to a daily-rotated file through a background
//! writer, so request handling never waits on disk.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_LOG_FILE: &str = "carpark.log";

/// Flushes the file writer when dropped. Keep it alive for the whole run.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

/// Default filter directive when `RUST_LOG` is not set.
pub fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("carpark={}", level)
}

/// Directory and file-name prefix for the rolling appender.
pub fn split_log_path(log_path: &Path) -> (PathBuf, OsString) {
    let dir = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    let file_name = log_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| OsString::from(DEFAULT_LOG_FILE));
    (dir, file_name)
}

pub fn init(verbose: bool, log_file: Option<PathBuf>) -> LogGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer);

    let Some(log_path) = log_file else {
        subscriber.init();
        return LogGuard { _file: None };
    };

    let (dir, file_name) = split_log_path(&log_path);
    let _ = std::fs::create_dir_all(&dir);
    let (writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, file_name));

    let file_layer = fmt::layer().with_writer(writer).with_ansi(false).json();
    subscriber.with(file_layer).init();

    LogGuard { _file: Some(guard) }
}
