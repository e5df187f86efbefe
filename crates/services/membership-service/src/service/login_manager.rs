//! Login manager - verifies single login attempts.

use std::sync::Arc;

use common::MembershipResult;

use super::login_flow::LoginFlow;
use crate::audit::{AuditLog, NullAuditLog};
use crate::repository::UserRepository;
use crate::security::PasswordChecker;

/// Verifies login attempts and writes the audit trail. Raises no events.
pub struct LoginManager {
    flow: LoginFlow,
}

impl LoginManager {
    /// Create a login manager that discards audit records
    pub fn new(users: Arc<dyn UserRepository>, checker: Arc<dyn PasswordChecker>) -> Self {
        Self::with_audit_log(users, checker, Arc::new(NullAuditLog))
    }

    /// Create a login manager writing to the given audit log
    pub fn with_audit_log(
        users: Arc<dyn UserRepository>,
        checker: Arc<dyn PasswordChecker>,
        audit: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            flow: LoginFlow::new(users, checker, audit, None),
        }
    }

    /// Try to log a user in.
    ///
    /// An empty login is audited and looked up like any other.
    ///
    /// # Errors
    /// `InvalidArgument` for a missing login or a missing password.
    /// Collaborator errors are returned unchanged.
    pub fn try_login(&self, login: Option<&str>, password: Option<&str>) -> MembershipResult<bool> {
        self.flow.try_login(login, password)
    }
}
