//! Logging Infrastructure
//!
//! Structured logging on stdout, or to a daily rolling file when a log
//! directory is configured.

use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output
///
/// `RUST_LOG` wins over `log_level` when set.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir.and_then(usable_log_dir) {
        let file_appender = tracing_appender::rolling::daily(dir, "dining-floor");
        subscriber.with_ansi(false).with_writer(file_appender).init();
        return;
    }

    subscriber.init();
}

/// Directory for rolling log files, if `dir` can hold them
fn usable_log_dir(dir: &str) -> Option<&Path> {
    let log_path = Path::new(dir);
    if log_path.is_dir() {
        Some(log_path)
    } else {
        eprintln!("Log directory {} is missing or not a directory, logging to stdout", dir);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usable_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        assert_eq!(usable_log_dir(dir_str), Some(dir.path()));

        let file = dir.path().join("plain.log");
        std::fs::write(&file, "").unwrap();
        assert_eq!(usable_log_dir(file.to_str().unwrap()), None);

        let missing = dir.path().join("missing");
        assert_eq!(usable_log_dir(missing.to_str().unwrap()), None);
    }
}
