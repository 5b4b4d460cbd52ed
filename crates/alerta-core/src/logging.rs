//! Logging infrastructure for Alerta Temprana.
//!
//! Structured logging using the `tracing` ecosystem. The terminal UI owns
//! stdout/stderr while it runs, so the only sink is a JSON lines file.
//!
//! ## Features
//!
//! - JSON lines format for machine parsing
//! - File output to `~/.alerta/logs/alerta.log.YYYY-MM-DD` (rolled daily, UTC)
//! - `RUST_LOG` overrides the default filter
//!
//! ## Example
//!
//! ```no_run
//! use alerta_core::logging;
//!
//! // Initialize logging (call once at startup)
//! let _guard = logging::init_logging(None, false).expect("logging init");
//!
//! // Use tracing macros
//! tracing::info!("alerta started");
//! tracing::debug!(alert_id = 1, "alert created");
//! ```

use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

use crate::error::{AlertaError, Result};

/// Prefix of the rolling log files inside the log directory.
pub const LOG_FILE_NAME: &str = "alerta.log";

/// Guard that must be held to ensure log flushing on shutdown.
///
/// Keep this guard alive for the lifetime of the application.
pub struct LogGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the logging system.
///
/// This sets up file logging to `<log_dir>/alerta.log.YYYY-MM-DD` in JSON
/// lines format. See [`current_log_file`] for today's path.
///
/// # Arguments
///
/// * `log_dir` - Optional custom log directory. Defaults to `~/.alerta/logs/`
/// * `verbose` - If true, sets log level to DEBUG. Otherwise uses INFO.
pub fn init_logging(log_dir: Option<PathBuf>, verbose: bool) -> Result<LogGuard> {
    let log_dir = match log_dir {
        Some(dir) => dir,
        None => default_log_dir()?,
    };

    std::fs::create_dir_all(&log_dir).map_err(|e| AlertaError::DirectoryCreation {
        path: log_dir.clone(),
        source: e,
    })?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("alerta={default_level}")));

    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false)
        .json()
        .with_span_events(FmtSpan::CLOSE)
        .with_current_span(true)
        .with_span_list(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| AlertaError::internal(format!("logging already initialized: {e}")))?;

    tracing::debug!(log_dir = %log_dir.display(), verbose, "logging initialized");

    Ok(LogGuard {
        _file_guard: Some(file_guard),
    })
}

/// Initialize minimal console-only logging for testing.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

/// Get the base data directory, `~/.alerta/`.
pub fn alerta_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").map_err(|_| AlertaError::Internal {
        message: "HOME environment variable not set".into(),
    })?;

    Ok(PathBuf::from(home).join(".alerta"))
}

/// Get the default log directory path, `~/.alerta/logs/`.
pub fn default_log_dir() -> Result<PathBuf> {
    Ok(alerta_home()?.join("logs"))
}

/// Path of the file the daily appender is writing today.
///
/// The appender suffixes [`LOG_FILE_NAME`] with the current UTC date.
pub fn current_log_file(log_dir: &Path) -> PathBuf {
    log_dir.join(format!("{LOG_FILE_NAME}.{}", chrono::Utc::now().format("%Y-%m-%d")))
}

/// Convenience macro for logging alert lifecycle events.
///
/// # Example
///
/// ```ignore
/// log_alert_event!(record.id.get(), "created");
/// log_alert_event!(id.get(), "removed", found = false);
/// ```
#[macro_export]
macro_rules! log_alert_event {
    ($alert_id:expr, $event:expr) => {
        tracing::debug!(
            target: "alerta::alert",
            alert_id = $alert_id,
            event = $event,
            "alert event"
        )
    };
    ($alert_id:expr, $event:expr, $($field:tt)*) => {
        tracing::debug!(
            target: "alerta::alert",
            alert_id = $alert_id,
            event = $event,
            $($field)*,
            "alert event"
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_default_log_dir() {
        // SAFETY: serialized with every other test that touches HOME
        unsafe { std::env::set_var("HOME", "/tmp/test-home") };
        let dir = default_log_dir().unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/test-home/.alerta/logs"));
    }

    #[test]
    fn test_current_log_file_has_date_suffix() {
        let file = current_log_file(Path::new("/tmp/test-home/.alerta/logs"));
        assert_eq!(file.parent(), Some(Path::new("/tmp/test-home/.alerta/logs")));
        let name = file.file_name().and_then(|n| n.to_str()).unwrap();
        let date = name.strip_prefix("alerta.log.").unwrap();
        assert!(chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d").is_ok(), "unexpected name {name}");
    }

    #[test]
    fn test_current_log_file_matches_appender_output() {
        let dir = std::env::temp_dir().join(format!("alerta-log-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        {
            let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_NAME);
            let (writer, _guard) = tracing_appender::non_blocking(appender);
            let subscriber = tracing_subscriber::fmt().with_writer(writer).finish();
            tracing::subscriber::with_default(subscriber, || tracing::info!("first line"));
        }
        assert!(current_log_file(&dir).exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_init_test_logging() {
        init_test_logging();
        init_test_logging();
    }
}
