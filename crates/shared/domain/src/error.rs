//! Domain-level errors.
//!
//! These errors are raised by collaborators (stores, hashers, sinks, emitters)
//! and travel through the membership core untouched.

use thiserror::Error;

/// Errors raised by collaborators: hashing, storage, sinks and event buses.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Password hashing or verification failed
    #[error("Password error: {0}")]
    Password(String),

    /// Entity already exists (conflict)
    #[error("{0} already exists")]
    Conflict(String),

    /// A backing resource (store, sink, bus) could not be reached
    #[error("Unavailable: {0}")]
    Unavailable(String),

    /// Internal domain error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Create a password error
    pub fn password(msg: impl Into<String>) -> Self {
        DomainError::Password(msg.into())
    }

    /// Create a conflict error
    pub fn conflict(entity: impl Into<String>) -> Self {
        DomainError::Conflict(entity.into())
    }

    /// Create an unavailable error
    pub fn unavailable(resource: impl Into<String>) -> Self {
        DomainError::Unavailable(resource.into())
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        DomainError::Internal(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_failing_resource() {
        assert_eq!(DomainError::conflict("alice").to_string(), "alice already exists");
        assert_eq!(
            DomainError::unavailable("user store").to_string(),
            "Unavailable: user store"
        );
        assert_eq!(
            DomainError::password("bad salt").to_string(),
            "Password error: bad salt"
        );
    }
}
