//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::ServiceConfig;

/// Initialize the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Calling this twice is a no-op
/// for the second call.
pub fn init_tracing(config: &ServiceConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    if installed.is_ok() {
        tracing::debug!(service = %config.service_name, "Tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        let config = ServiceConfig {
            service_name: "telemetry-test".to_string(),
            log_level: "debug".to_string(),
        };

        init_tracing(&config);
        init_tracing(&config);

        tracing::info!("still logging after second init");
    }
}
