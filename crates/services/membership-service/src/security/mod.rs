//! Credential verification.

mod password_checker;

pub use password_checker::{HashingPasswordChecker, PasswordChecker};

#[cfg(any(test, feature = "test-utils"))]
pub use password_checker::MockPasswordChecker;
