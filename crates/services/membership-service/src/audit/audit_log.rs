//! Audit log contract and record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain::{DomainResult, AUDIT_MESSAGE_ATTEMPT, AUDIT_MESSAGE_FAILURE, AUDIT_MESSAGE_SUCCESS};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// What an audit record reports about a login
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Attempt,
    Success,
    Failure,
}

impl AuditAction {
    /// Fixed audit text for this action
    pub fn message(&self) -> &'static str {
        match self {
            AuditAction::Attempt => AUDIT_MESSAGE_ATTEMPT,
            AuditAction::Success => AUDIT_MESSAGE_SUCCESS,
            AuditAction::Failure => AUDIT_MESSAGE_FAILURE,
        }
    }
}

impl std::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Audit sink trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait AuditLog: Send + Sync {
    /// Record an audit entry for a login
    fn audit(&self, login: &str, action: AuditAction) -> DomainResult<()>;
}

/// Immutable audit record as kept by recording sinks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: Uuid,
    pub login: String,
    pub action: AuditAction,
    pub message: String,
    pub recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Create a record stamped with the current time
    pub fn new(login: impl Into<String>, action: AuditAction) -> Self {
        Self {
            id: Uuid::new_v4(),
            login: login.into(),
            action,
            message: action.message().to_string(),
            recorded_at: Utc::now(),
        }
    }
}
