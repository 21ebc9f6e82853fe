//! Logging Infrastructure
//!
//! The terminal UI owns stdout, so the console binary logs to a daily
//! rolling file. Tests and one-shot commands log to stderr.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger on stderr
pub fn init_logger(log_level: Option<&str>) {
    init_logger_with_file(log_level, None);
}

/// Initialize the logger with optional file output
///
/// `RUST_LOG` takes precedence over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&Path>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{level},redb=warn")));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir
        && (dir.exists() || std::fs::create_dir_all(dir).is_ok())
    {
        let file_appender = tracing_appender::rolling::daily(dir, "admin-console");
        let _ = subscriber.with_ansi(false).with_writer(file_appender).try_init();
        return;
    }

    let _ = subscriber.with_writer(std::io::stderr).try_init();
}
