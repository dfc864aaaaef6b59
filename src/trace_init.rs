//! Opt-in JSON trace file for hosts embedding the engine.

use std::path::Path;

#[cfg(feature = "trace")]
const TRACE_FILE: &str = "hodiya-trace.jsonl";

#[cfg(feature = "trace")]
const DEFAULT_FILTER: &str = "hodiya_engine=debug,hodiya_core=debug";

/// Route `tracing` events to `log_dir/hodiya-trace.jsonl`, creating the
/// directory if needed. Only the first call installs a subscriber.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    use std::sync::Once;
    use tracing_subscriber::fmt::format::FmtSpan;
    use tracing_subscriber::EnvFilter;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        if std::fs::create_dir_all(log_dir).is_err() {
            return;
        }
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // Hosts keep the engine loaded until exit.
        std::mem::forget(guard);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let _ = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &Path) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(feature = "trace"))]
    fn test_init_is_noop_without_feature() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("logs");
        init_tracing(&target);
        assert!(!target.exists());
    }

    #[test]
    #[cfg(feature = "trace")]
    fn test_init_creates_log_dir() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("logs");
        init_tracing(&target);
        assert!(target.is_dir());
    }
}
