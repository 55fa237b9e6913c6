//! Tracing subscriber initialization.
//!
//! The TUI owns the terminal, so log output goes to a file; monitor it
//! with `tail -f` in another terminal. Respects `RUST_LOG`, defaulting
//! to "info".

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory could not be created.
    #[error("failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// Directory that failed to be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The log path has no filename component.
    #[error("invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// The tracing subscriber was already initialized.
    #[error("tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Initialize file-based logging, creating the log directory if needed.
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    use tracing_subscriber::EnvFilter;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|source| LoggingError::DirectoryCreation {
                path: parent.to_path_buf(),
                source,
            })?;
            parent
        }
        _ => Path::new("."),
    };

    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let file_appender = tracing_appender::rolling::never(directory, file_name);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(file_appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;

    // The subscriber is process-global, so init() may legitimately fail
    // with SubscriberAlreadySet in later tests; directory creation still
    // happens first and is what these tests observe.

    #[test]
    #[serial(tracing_init)]
    fn init_creates_a_missing_log_directory() {
        let test_dir = std::env::temp_dir().join("udex_test_logs_create");
        let log_file = test_dir.join("udex.log");
        let _ = fs::remove_dir_all(&test_dir);

        let _ = init(&log_file);

        assert!(test_dir.exists());
        let _ = fs::remove_dir_all(&test_dir);
    }

    #[test]
    #[serial(tracing_init)]
    fn init_tolerates_an_existing_directory() {
        let test_dir = std::env::temp_dir().join("udex_test_logs_exists");
        let log_file = test_dir.join("udex.log");
        let _ = fs::create_dir_all(&test_dir);

        let _ = init(&log_file);

        assert!(test_dir.exists());
        let _ = fs::remove_dir_all(&test_dir);
    }
}
