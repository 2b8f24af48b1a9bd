use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Setup logging with console and daily-rotated JSON file output.
///
/// The returned guard flushes the file writer on drop and must live as long as the process.
pub fn setup_logging(config: &LoggingConfig) -> WorkerGuard {
    let log_path = Path::new(&config.file);
    let directory = log_path.parent().unwrap_or(Path::new("logs"));
    let file_name = log_path.file_name().unwrap_or(std::ffi::OsStr::new("app.log"));

    std::fs::create_dir_all(directory).ok();

    let file_appender = RollingFileAppender::new(Rotation::DAILY, directory, file_name);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .compact();

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_target(true)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level)))
        .with(console_layer)
        .with(file_layer)
        .init();

    tracing::info!("Logging initialized with level: {}", config.level);
    guard
}
