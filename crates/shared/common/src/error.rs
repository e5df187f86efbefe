//! Core error handling.
//!
//! Validation failures are raised by the managers themselves. Anything a
//! collaborator returns is carried through untouched in `Collaborator`.

use domain::DomainError;
use thiserror::Error;

/// Errors returned by the membership managers.
#[derive(Error, Debug)]
pub enum MembershipError {
    /// A required argument or collaborator was missing
    #[error("Missing required argument: {name}")]
    InvalidArgument { name: &'static str },

    /// An argument was present but outside its accepted range
    #[error("{message}")]
    ArgumentOutOfRange { name: &'static str, message: String },

    /// A collaborator failed; the original error is preserved
    #[error(transparent)]
    Collaborator(#[from] DomainError),
}

impl MembershipError {
    /// Get a stable error code
    pub fn code(&self) -> &'static str {
        match self {
            MembershipError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            MembershipError::ArgumentOutOfRange { .. } => "ARGUMENT_OUT_OF_RANGE",
            MembershipError::Collaborator(_) => "COLLABORATOR_ERROR",
        }
    }

    /// Name of the offending argument, if the error is a validation failure
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            MembershipError::InvalidArgument { name }
            | MembershipError::ArgumentOutOfRange { name, .. } => Some(name),
            MembershipError::Collaborator(_) => None,
        }
    }
}

/// Convenience constructors
impl MembershipError {
    pub fn invalid_argument(name: &'static str) -> Self {
        MembershipError::InvalidArgument { name }
    }

    pub fn out_of_range(name: &'static str, message: impl Into<String>) -> Self {
        MembershipError::ArgumentOutOfRange {
            name,
            message: message.into(),
        }
    }
}

/// Result type alias
pub type MembershipResult<T> = Result<T, MembershipError>;

/// Extension trait for rejecting missing arguments
pub trait RequiredExt<T> {
    fn required(self, name: &'static str) -> MembershipResult<T>;
}

impl<T> RequiredExt<T> for Option<T> {
    fn required(self, name: &'static str) -> MembershipResult<T> {
        self.ok_or(MembershipError::InvalidArgument { name })
    }
}
