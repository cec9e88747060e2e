//! Logging Infrastructure
//!
//! Structured logging setup shared by the binary and (optionally) tests.
//! Console output by default; daily-rolling file output when a log directory
//! is configured.

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with console output only
pub fn init_logger() {
    init_logger_with_file(None);
}

/// Initialize the logger, writing to a daily-rolling file when `log_dir`
/// names an existing directory
pub fn init_logger_with_file(log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "cafe_server=info,tower_http=info".into());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(dir, "cafe-server");
            subscriber.with_writer(file_appender).init();
            return;
        }
        // Fall through to console logging when the directory is missing
    }

    subscriber.init();
}
