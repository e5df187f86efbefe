//! Membership service configuration.

use std::env;
use std::path::PathBuf;

use common::ServiceConfig;
use thiserror::Error;

use crate::events::DEFAULT_EVENT_CAPACITY;

/// Prefix of every membership environment variable
pub const ENV_PREFIX: &str = "MEMBERSHIP";

/// Service name used when none is configured
pub const DEFAULT_SERVICE_NAME: &str = "membership-service";

/// Where audit records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditSink {
    /// Discard every record
    None,
    /// Forward records to the tracing pipeline
    Tracing,
    /// Append JSON lines to a file
    File(PathBuf),
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("MEMBERSHIP_AUDIT_PATH must be set when MEMBERSHIP_AUDIT_SINK=file")]
    MissingAuditPath,

    #[error("Failed to open audit log {}: {source}", .path.display())]
    AuditFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Membership service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MembershipConfig {
    /// Service name and log level
    pub service: ServiceConfig,
    /// Audit destination
    pub audit_sink: AuditSink,
    /// Buffer size of the login event channel
    pub event_capacity: usize,
}

impl MembershipConfig {
    /// Load `.env` if present, then read the environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    ///
    /// Unrecognised values fall back to defaults; only a file sink without a
    /// path is rejected.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let service = ServiceConfig::from_lookup(ENV_PREFIX, DEFAULT_SERVICE_NAME, &lookup);

        let audit_sink = match lookup("MEMBERSHIP_AUDIT_SINK")
            .map(|sink| sink.trim().to_ascii_lowercase())
            .as_deref()
        {
            Some("none") | Some("off") => AuditSink::None,
            Some("file") => AuditSink::File(
                lookup("MEMBERSHIP_AUDIT_PATH")
                    .filter(|path| !path.trim().is_empty())
                    .map(PathBuf::from)
                    .ok_or(ConfigError::MissingAuditPath)?,
            ),
            _ => AuditSink::Tracing,
        };

        let event_capacity = lookup("MEMBERSHIP_EVENT_CAPACITY")
            .and_then(|capacity| capacity.parse().ok())
            .filter(|&capacity: &usize| capacity > 0)
            .unwrap_or(DEFAULT_EVENT_CAPACITY);

        Ok(Self {
            service,
            audit_sink,
            event_capacity,
        })
    }
}

impl Default for MembershipConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: DEFAULT_SERVICE_NAME.to_string(),
                log_level: common::DEFAULT_LOG_LEVEL.to_string(),
            },
            audit_sink: AuditSink::Tracing,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}
