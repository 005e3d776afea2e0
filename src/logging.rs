use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// File name used inside the configured log directory.
pub const LOG_FILE_NAME: &str = "squaremaze.log";

/// Installs the global `tracing` subscriber.
///
/// Logs are written through a non-blocking appender, to `LOG_FILE_NAME` in the configured
/// directory or to stderr otherwise, so they never interleave with the maze printed on stdout.
/// The returned guard flushes pending lines when dropped and must outlive the program's work.
pub fn init(config: &Config) -> anyhow::Result<WorkerGuard> {
    let filter = EnvFilter::try_new(&config.log_filter)?;
    let (writer, guard) = match &config.log_dir {
        Some(dir) => {
            tracing_appender::non_blocking(tracing_appender::rolling::never(dir, LOG_FILE_NAME))
        }
        None => tracing_appender::non_blocking(std::io::stderr()),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(config.log_dir.is_none() && config.color)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {e}"))?;

    tracing::debug!("[logging] initialized with filter {:?}", config.log_filter);
    Ok(guard)
}
