//! Domain-level constants.
//!
//! These constants define business rules and the fixed audit vocabulary.

// =============================================================================
// Registration
// =============================================================================

/// Maximum number of users accepted by a single batch creation call
pub const MAX_USERS_PER_BATCH: usize = 10;

// =============================================================================
// Audit
// =============================================================================

/// Audit message written before a login attempt is evaluated
pub const AUDIT_MESSAGE_ATTEMPT: &str = "Trying to log in.";

/// Audit message written after a successful login
pub const AUDIT_MESSAGE_SUCCESS: &str = "Logged in.";

/// Audit message written after a failed login
pub const AUDIT_MESSAGE_FAILURE: &str = "Failed to log in.";

/// Tracing target used by audit sinks that forward to the log pipeline
pub const AUDIT_TRACING_TARGET: &str = "audit";
