/// Logging setup.
///
/// Logs go to `{log_dir}/hxglue.log` when a log directory is configured,
/// otherwise to stderr.
use anyhow::{Context, Result};
use std::path::Path;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "hxglue.log";

/// Initializes the global tracing subscriber.
///
/// # Arguments
///
/// * `log_dir` - Directory for the log file; `None` logs to stderr
/// * `default_filter` - Filter used when `RUST_LOG` is not set
pub fn init_logging(log_dir: Option<&Path>, default_filter: &str) -> Result<()> {
    // Allow override via RUST_LOG env var
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let file_appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let file_layer = fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false) // No ANSI codes in log files
                .with_target(true)
                .with_line_number(true);

            tracing_subscriber::registry()
                .with(filter)
                .with(file_layer)
                .try_init()
                .ok(); // Ignore error if already initialized
        }
        None => {
            let stderr_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false);

            tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init()
                .ok();
        }
    }

    tracing::debug!("Logging initialized");
    Ok(())
}
