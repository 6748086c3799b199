use crate::config::LoggingConfig;
use crate::error::{GeneratorError, Result};
use std::io::IsTerminal;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_FILE_PREFIX: &str = "generator.log";

/// Initializes logging to stderr, plus a JSON log file when
/// `config.directory` is set.
///
/// `RUST_LOG` takes precedence over `config.level`. The returned guard must be
/// held until exit so buffered file output is flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cockroachdb_metrics_gen={},warn", config.level)));

    // Console output goes to stderr so stdout only carries the run summary
    let console_layer = fmt::layer()
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.directory {
        Some(dir) => {
            let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender(dir)?);
            let layer = fmt::layer().json().with_writer(non_blocking_writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // try_init so repeated initialization (e.g. in tests) is not fatal
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init();

    Ok(guard)
}

/// Daily-rolling log file in `dir`, creating the directory if needed.
fn file_appender(dir: &Path) -> Result<RollingFileAppender> {
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .build(dir)
        .map_err(|e| {
            GeneratorError::Config(format!(
                "Failed to open log directory '{}': {}",
                dir.display(),
                e
            ))
        })
}
