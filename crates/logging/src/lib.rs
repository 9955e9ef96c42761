use std::path::Path;

use once_cell::sync::OnceCell;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::EnvFilter;

// Tests write straight to the file. Otherwise the non-blocking worker's guard
// is kept for the life of the process.
#[cfg(not(test))]
type Guard = tracing_appender::non_blocking::WorkerGuard;

#[cfg(test)]
type Guard = ();

static TRACING: OnceCell<Guard> = OnceCell::new();

pub const DEFAULT_LOG_DIR: &str = "./logs";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[cfg(not(test))]
fn file_writer(appender: RollingFileAppender) -> (tracing_appender::non_blocking::NonBlocking, Guard) {
    tracing_appender::non_blocking(appender)
}

#[cfg(test)]
fn file_writer(appender: RollingFileAppender) -> (RollingFileAppender, Guard) {
    (appender, ())
}

/// Initialise tracing, writing to `<log_dir>/<module>.log`.
///
/// `RUST_LOG` takes precedence over `level` when set. Only the first call in a
/// process installs the subscriber, later calls are no-ops.
pub fn init_tracing_in(log_dir: &Path, level: &str, module: &str) {
    TRACING.get_or_init(|| {
        let appender = tracing_appender::rolling::never(log_dir, format!("{module}.log"));
        let (writer, guard) = file_writer(appender);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level));

        // Another subscriber may already be installed by the host process.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true)
            .with_thread_names(true)
            .try_init();

        guard
    });
}

/// Returns true once `init_tracing_in` went through.
pub fn is_initialized() -> bool {
    TRACING.get().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        let dir = std::env::temp_dir().join(format!("logging-test-{}", std::process::id()));

        init_tracing_in(&dir, "debug", "logging_test");
        init_tracing_in(&dir, "trace", "other_module");

        assert!(is_initialized());
        tracing::info!("logging initialised in {}", dir.display());

        assert!(dir.join("logging_test.log").exists());
        assert!(!dir.join("other_module.log").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
