//! Audit trail - login attempt and outcome records.
//!
//! The managers write one `Attempt` record and exactly one `Success` or
//! `Failure` record per validated login call. Where those records end up is
//! decided by whichever sink is bound at construction.

mod audit_log;
mod sinks;

pub use audit_log::{AuditAction, AuditEntry, AuditLog};
pub use sinks::{JsonLinesAuditLog, MemoryAuditLog, NullAuditLog, TracingAuditLog};

#[cfg(any(test, feature = "test-utils"))]
pub use audit_log::MockAuditLog;
