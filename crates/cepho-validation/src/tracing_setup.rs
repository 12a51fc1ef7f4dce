//! Span definitions and subscriber setup.

use cepho_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Create a validation span for one insight.
#[macro_export]
macro_rules! validation_span {
    ($insight_id:expr) => {
        tracing::info_span!("cepho.validation", insight_id = %$insight_id)
    };
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins over the configured level when set. Returns `false` if a
/// global subscriber was already installed.
pub fn init(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.json_logs {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}
