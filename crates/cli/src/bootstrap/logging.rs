use dnsplan_domain::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Logs go to stderr; stdout carries only the compiled configuration.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = if config.is_json() {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    };
}
