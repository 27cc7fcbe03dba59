use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use super::TracingConfig;

const DEFAULT_FILTER: &str = "info,babel=debug,tower_http=debug";

/// Initialize the tracing subscriber with structured logging.
pub fn init_tracing(config: &TracingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if config.json_format {
        registry.with(layer.json()).init();
    } else {
        registry.with(layer).init();
    }

    tracing::info!(
        environment = %config.environment,
        json_format = config.json_format,
        "Tracing initialized"
    );
}
