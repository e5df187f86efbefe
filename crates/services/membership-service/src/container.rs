//! Service wiring - builds managers from explicit collaborators.
//!
//! Every collaborator is bound here, at construction time. The audit log is
//! the only optional slot; leaving it empty binds `NullAuditLog`.

use std::sync::Arc;

use common::{MembershipResult, RequiredExt};

use crate::audit::{AuditLog, JsonLinesAuditLog, NullAuditLog, TracingAuditLog};
use crate::config::{AuditSink, ConfigError, MembershipConfig};
use crate::events::{BroadcastEventEmitter, EventEmitter, UserLoggedIn};
use crate::repository::UserRepository;
use crate::security::PasswordChecker;
use crate::service::{LoginManager, MembershipManager};

/// Collects collaborators and builds managers from them.
///
/// Missing required collaborators are reported when a manager is built.
#[derive(Default, Clone)]
pub struct MembershipBuilder {
    users: Option<Arc<dyn UserRepository>>,
    checker: Option<Arc<dyn PasswordChecker>>,
    events: Option<Arc<dyn EventEmitter>>,
    audit: Option<Arc<dyn AuditLog>>,
}

impl MembershipBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repository(mut self, users: Arc<dyn UserRepository>) -> Self {
        self.users = Some(users);
        self
    }

    pub fn password_checker(mut self, checker: Arc<dyn PasswordChecker>) -> Self {
        self.checker = Some(checker);
        self
    }

    pub fn event_emitter(mut self, events: Arc<dyn EventEmitter>) -> Self {
        self.events = Some(events);
        self
    }

    pub fn audit_log(mut self, audit: Arc<dyn AuditLog>) -> Self {
        self.audit = Some(audit);
        self
    }

    fn audit_or_null(&self) -> Arc<dyn AuditLog> {
        self.audit
            .clone()
            .unwrap_or_else(|| Arc::new(NullAuditLog))
    }

    /// Build a `LoginManager`.
    ///
    /// # Errors
    /// `InvalidArgument` naming the first missing collaborator.
    pub fn build_login_manager(&self) -> MembershipResult<LoginManager> {
        let users = self.users.clone().required("user_repository")?;
        let checker = self.checker.clone().required("password_checker")?;

        Ok(LoginManager::with_audit_log(users, checker, self.audit_or_null()))
    }

    /// Build a `MembershipManager`.
    ///
    /// # Errors
    /// `InvalidArgument` naming the first missing collaborator.
    pub fn build_membership_manager(&self) -> MembershipResult<MembershipManager> {
        let users = self.users.clone().required("user_repository")?;
        let checker = self.checker.clone().required("password_checker")?;
        let events = self.events.clone().required("event_emitter")?;

        Ok(MembershipManager::with_audit_log(
            users,
            checker,
            events,
            self.audit_or_null(),
        ))
    }
}

/// Open the audit sink described by the configuration
pub fn open_audit_sink(sink: &AuditSink) -> Result<Arc<dyn AuditLog>, ConfigError> {
    let audit: Arc<dyn AuditLog> = match sink {
        AuditSink::None => Arc::new(NullAuditLog),
        AuditSink::Tracing => Arc::new(TracingAuditLog),
        AuditSink::File(path) => {
            let log = JsonLinesAuditLog::open(path).map_err(|source| ConfigError::AuditFile {
                path: path.clone(),
                source,
            })?;
            Arc::new(log)
        }
    };
    Ok(audit)
}

/// Both managers wired against one store, one audit sink and one event bus.
pub struct Services {
    login: Arc<LoginManager>,
    membership: Arc<MembershipManager>,
    events: BroadcastEventEmitter,
}

impl Services {
    /// Build services from configuration plus the store and checker.
    ///
    /// Install tracing first so the audit sink and login diagnostics have
    /// somewhere to go:
    ///
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use membership_service::repository::InMemoryUserStore;
    /// use membership_service::security::HashingPasswordChecker;
    /// use membership_service::{MembershipConfig, Services};
    ///
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let config = MembershipConfig::load()?;
    ///     common::init_tracing(&config.service);
    ///
    ///     let checker: HashingPasswordChecker = HashingPasswordChecker::default();
    ///     let services = Services::from_config(
    ///         &config,
    ///         Arc::new(InMemoryUserStore::new()),
    ///         Arc::new(checker),
    ///     )?;
    ///
    ///     let logged_in = services.login().try_login(Some("alice"), Some("pw1"))?;
    ///     tracing::info!(logged_in, "Membership service ready");
    ///     Ok(())
    /// }
    /// ```
    pub fn from_config(
        config: &MembershipConfig,
        users: Arc<dyn UserRepository>,
        checker: Arc<dyn PasswordChecker>,
    ) -> Result<Self, ConfigError> {
        let audit = open_audit_sink(&config.audit_sink)?;
        let events = BroadcastEventEmitter::new(config.event_capacity);

        let login = LoginManager::with_audit_log(users.clone(), checker.clone(), audit.clone());
        let membership =
            MembershipManager::with_audit_log(users, checker, Arc::new(events.clone()), audit);

        tracing::debug!(
            service = %config.service.service_name,
            audit_sink = ?config.audit_sink,
            event_capacity = config.event_capacity,
            "Membership services wired"
        );

        Ok(Self {
            login: Arc::new(login),
            membership: Arc::new(membership),
            events,
        })
    }

    /// Get the login manager
    pub fn login(&self) -> Arc<LoginManager> {
        self.login.clone()
    }

    /// Get the membership manager
    pub fn membership(&self) -> Arc<MembershipManager> {
        self.membership.clone()
    }

    /// Subscribe to `UserLoggedIn` events raised by the membership manager
    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<UserLoggedIn> {
        self.events.subscribe()
    }
}
