//! Membership manager - login with notifications, plus batch registration.

use std::sync::Arc;

use common::{MembershipError, MembershipResult, RequiredExt};
use domain::{User, MAX_USERS_PER_BATCH};

use super::login_flow::LoginFlow;
use crate::audit::{AuditLog, NullAuditLog};
use crate::events::EventEmitter;
use crate::repository::UserRepository;
use crate::security::PasswordChecker;

/// Login verification that announces successful logins, and bounded
/// batch user creation.
pub struct MembershipManager {
    flow: LoginFlow,
}

impl MembershipManager {
    /// Create a membership manager that discards audit records
    pub fn new(
        users: Arc<dyn UserRepository>,
        checker: Arc<dyn PasswordChecker>,
        events: Arc<dyn EventEmitter>,
    ) -> Self {
        Self::with_audit_log(users, checker, events, Arc::new(NullAuditLog))
    }

    /// Create a membership manager writing to the given audit log
    pub fn with_audit_log(
        users: Arc<dyn UserRepository>,
        checker: Arc<dyn PasswordChecker>,
        events: Arc<dyn EventEmitter>,
        audit: Arc<dyn AuditLog>,
    ) -> Self {
        Self {
            flow: LoginFlow::new(users, checker, audit, Some(events)).rejecting_empty_login(),
        }
    }

    /// Try to log a user in, emitting `UserLoggedIn` on success.
    ///
    /// The event is emitted after the success audit record.
    ///
    /// # Errors
    /// `InvalidArgument` for a missing or empty login or a missing password.
    /// Collaborator errors are returned unchanged.
    pub fn try_login(&self, login: Option<&str>, password: Option<&str>) -> MembershipResult<bool> {
        self.flow.try_login(login, password)
    }

    /// Persist up to `MAX_USERS_PER_BATCH` users, in order.
    ///
    /// User contents are not validated here. The first failing create is
    /// returned as-is and users created before it stay created.
    ///
    /// # Errors
    /// `InvalidArgument` when `users` is missing, `ArgumentOutOfRange` when
    /// the batch is too large. Neither writes anything.
    pub fn create_multiple_users(&self, users: Option<&[User]>) -> MembershipResult<()> {
        let users = users.required("users")?;

        if users.len() > MAX_USERS_PER_BATCH {
            tracing::warn!(count = users.len(), "Batch creation rejected: too many users");
            return Err(MembershipError::out_of_range(
                "users",
                format!(
                    "Too many users. You cannot create more than {} users at once.",
                    MAX_USERS_PER_BATCH
                ),
            ));
        }

        for user in users {
            self.flow.users().create_user(user)?;
        }

        tracing::debug!(count = users.len(), "Batch creation finished");
        Ok(())
    }
}
