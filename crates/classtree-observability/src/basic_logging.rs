use classtree_config::{LogFormat, LoggingConfig};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the filter: `RUST_LOG` wins, otherwise `LOG_LEVEL` for this
/// workspace's crates with everything else held at `warn`.
pub fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,classtree={level},classtree_cli={level},classtree_observability={level}"
        ))
    })
}

/// Console-only logging, used when the `observability` feature is disabled.
///
/// Output goes to stderr so command output on stdout stays machine-readable.
/// Does nothing if a global subscriber is already installed.
pub fn init_basic_console_logging(config: &LoggingConfig) {
    let console_layer = match config.format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_filter(env_filter(&config.level))
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_writer(std::io::stderr)
            .with_filter(env_filter(&config.level))
            .boxed(),
    };

    let _ = tracing_subscriber::registry().with(console_layer).try_init();
}
