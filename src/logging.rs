use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize logging to both console and file
/// Log files are created in ./logs directory with daily rotation
pub fn init_logging() {
    std::fs::create_dir_all("./logs").expect("Failed to create logs directory");

    let file_appender = RollingFileAppender::new(Rotation::DAILY, "./logs", "market-pulse.log");

    tracing_subscriber::registry()
        .with(
            // Console output
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_ansi(true),
        )
        .with(
            // File output with JSON formatting
            tracing_subscriber::fmt::layer()
                .with_writer(file_appender)
                .with_target(true)
                .with_ansi(false)
                .json(),
        )
        .with(
            // Set via RUST_LOG, default to info
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}
