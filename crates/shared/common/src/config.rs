//! Shared configuration structures.

use std::env;

/// Default log filter when neither `RUST_LOG` nor a service level is set
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Base service configuration shared by all services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Log level
    pub log_level: String,
}

impl ServiceConfig {
    /// Load configuration from `<PREFIX>_SERVICE_NAME` and `<PREFIX>_LOG_LEVEL`.
    pub fn from_env(prefix: &str, default_name: &str) -> Self {
        Self::from_lookup(prefix, default_name, |key| env::var(key).ok())
    }

    /// Same as `from_env`, reading values through `lookup`.
    pub fn from_lookup(
        prefix: &str,
        default_name: &str,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        Self {
            service_name: lookup(&format!("{}_SERVICE_NAME", prefix))
                .unwrap_or_else(|| default_name.to_string()),
            log_level: lookup(&format!("{}_LOG_LEVEL", prefix))
                .filter(|level| !level.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_falls_back_to_defaults() {
        let config = ServiceConfig::from_env("COMMON_TEST_UNSET_PREFIX", "membership");

        assert_eq!(config.service_name, "membership");
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_from_env_reads_prefixed_values() {
        env::set_var("COMMON_TEST_SET_SERVICE_NAME", "members-eu");
        env::set_var("COMMON_TEST_SET_LOG_LEVEL", "debug");

        let config = ServiceConfig::from_env("COMMON_TEST_SET", "membership");

        assert_eq!(config.service_name, "members-eu");
        assert_eq!(config.log_level, "debug");
    }
}
