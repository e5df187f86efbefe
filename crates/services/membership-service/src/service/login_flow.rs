//! Login verification shared by both managers.

use std::sync::Arc;

use common::{MembershipError, MembershipResult};

use crate::audit::{AuditAction, AuditLog};
use crate::events::EventEmitter;
use crate::repository::UserRepository;
use crate::security::PasswordChecker;

/// One login pipeline: validate, audit, look up, verify, audit, notify.
///
/// Holds nothing but collaborator handles, so every call is independent.
pub(crate) struct LoginFlow {
    users: Arc<dyn UserRepository>,
    checker: Arc<dyn PasswordChecker>,
    audit: Arc<dyn AuditLog>,
    events: Option<Arc<dyn EventEmitter>>,
    reject_empty_login: bool,
}

impl LoginFlow {
    pub(crate) fn new(
        users: Arc<dyn UserRepository>,
        checker: Arc<dyn PasswordChecker>,
        audit: Arc<dyn AuditLog>,
        events: Option<Arc<dyn EventEmitter>>,
    ) -> Self {
        Self {
            users,
            checker,
            audit,
            events,
            reject_empty_login: false,
        }
    }

    /// Treat an empty login like a missing one.
    pub(crate) fn rejecting_empty_login(mut self) -> Self {
        self.reject_empty_login = true;
        self
    }

    pub(crate) fn users(&self) -> &Arc<dyn UserRepository> {
        &self.users
    }

    /// Run one login attempt.
    ///
    /// Argument checks happen before any collaborator is touched. An empty
    /// login is looked up like any other unless the flow rejects it.
    /// Collaborator errors abort the attempt and are returned as-is.
    pub(crate) fn try_login(
        &self,
        login: Option<&str>,
        password: Option<&str>,
    ) -> MembershipResult<bool> {
        let reject_empty = self.reject_empty_login;
        let Some(login) = login.filter(|login| !(reject_empty && login.is_empty())) else {
            tracing::warn!("Login rejected: missing login");
            return Err(MembershipError::invalid_argument("login"));
        };
        let Some(password) = password else {
            tracing::warn!(login = %login, "Login rejected: missing password");
            return Err(MembershipError::invalid_argument("password"));
        };

        self.audit.audit(login, AuditAction::Attempt)?;

        let verified = match self.users.get_existing_user(login)? {
            Some(user) => self.checker.is_password_valid(password, &user)?,
            None => {
                tracing::debug!(login = %login, "Login failed: unknown user");
                false
            }
        };

        if !verified {
            self.audit.audit(login, AuditAction::Failure)?;
            tracing::debug!(login = %login, "Login failed");
            return Ok(false);
        }

        self.audit.audit(login, AuditAction::Success)?;
        if let Some(events) = &self.events {
            events.emit_user_logged_in(login)?;
        }

        tracing::debug!(login = %login, "Login succeeded");
        Ok(true)
    }
}
