use std::io;
use std::path::Path;
use std::sync::OnceLock;

use classtree_config::{LogFormat, LoggingConfig};
use tracing::info;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::basic_logging::env_filter;

pub const LOG_FILE_PREFIX: &str = "classtree.log";

static OBSERVABILITY_ENABLED: OnceLock<bool> = OnceLock::new();

/// Check if observability is enabled via the `OBSERVABILITY_ENABLED` env var.
pub fn is_observability_enabled() -> bool {
    *OBSERVABILITY_ENABLED.get_or_init(|| {
        std::env::var("OBSERVABILITY_ENABLED")
            .map(|v| v.to_lowercase() != "false" && v != "0")
            .unwrap_or(true) // Enabled by default
    })
}

/// Keeps the background file writer alive; drop it last to flush logs.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file: Option<WorkerGuard>,
}

/// Create `dir` if needed and open a daily-rolling, non-blocking writer in it.
pub fn file_writer(dir: &Path) -> io::Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    Ok(tracing_appender::non_blocking(appender))
}

/// Install the global subscriber.
///
/// - Console layer on stderr, compact or JSON per `LOG_FORMAT`
/// - JSON file layer under `LOG_DIR` when set and observability is enabled
///
/// Calling this twice keeps the first subscriber.
pub fn init_tracing(config: &LoggingConfig) -> LoggingGuard {
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    layers.push(match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(io::stderr)
            .with_filter(env_filter(&config.level))
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(io::stderr)
            .with_filter(env_filter(&config.level))
            .boxed(),
    });

    let mut file_guard = None;
    if let Some(dir) = config.log_dir.as_deref()
        && is_observability_enabled()
    {
        match file_writer(dir) {
            Ok((writer, guard)) => {
                layers.push(
                    fmt::layer()
                        .json()
                        .with_ansi(false)
                        .with_writer(writer)
                        .with_filter(env_filter(&config.level))
                        .boxed(),
                );
                file_guard = Some(guard);
            }
            Err(e) => {
                eprintln!("⚠️  Failed to open log directory {}: {}", dir.display(), e);
            }
        }
    }

    if tracing_subscriber::registry().with(layers).try_init().is_ok() {
        info!(
            format = ?config.format,
            file_logging = file_guard.is_some(),
            "Logging initialised"
        );
    }

    LoggingGuard { _file: file_guard }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_writer_creates_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("storage").join("logs");

        let (_writer, _guard) = file_writer(&dir).unwrap();

        assert!(dir.is_dir());
    }

    #[test]
    fn test_file_writer_rejects_file_path() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        assert!(file_writer(tmp.path()).is_err());
    }
}
