//! Log file setup.
//!
//! The terminal is in raw mode on the alternate screen while the app runs,
//! so log lines go to a file in the config directory instead of stderr.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, LoggingConfig};

/// Build the filter: `RUST_LOG` wins over the configured level.
pub fn env_filter(logging: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level))
}

/// Install the global subscriber writing to `<dir>/<file_name>`.
///
/// The returned guard flushes pending lines on drop; keep it alive until exit.
pub fn init_in(dir: &Path, logging: &LoggingConfig) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(dir)?;
    let appender = tracing_appender::rolling::never(dir, &logging.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(logging))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;
    Ok(guard)
}

/// Install logging from config. Returns `None` when logging is disabled or
/// no config directory exists.
pub fn init(config: &Config) -> anyhow::Result<Option<WorkerGuard>> {
    if !config.logging.enabled {
        return Ok(None);
    }
    match Config::config_dir() {
        Some(dir) => init_in(&dir, &config.logging).map(Some),
        None => Ok(None),
    }
}
