use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `MAZEPATH_LOG=mazepath=debug`.
pub const LOG_ENV: &str = "MAZEPATH_LOG";

/// Default filter when [`LOG_ENV`] is unset or invalid.
const DEFAULT_FILTER: &str = "warn";

/// Installs the global tracing subscriber.
///
/// Logs go to stderr, or to a daily rolling `mazepath.log` inside `log_dir`
/// when one is given, so they never mix with the maze drawn on stdout.
/// The returned guard flushes pending records on drop and must be kept alive
/// for as long as logging is needed.
pub fn init(log_dir: Option<&Path>) -> WorkerGuard {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let (writer, guard) = match log_dir {
        Some(dir) => {
            tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, "mazepath.log"))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log_dir.is_none())
        .with_target(false)
        .try_init();
    if let Err(e) = result {
        eprintln!("Failed to install logger: {e}");
    }
    guard
}
