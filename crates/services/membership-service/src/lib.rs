//! Membership Service Library
//!
//! Login verification with an audit trail, login notifications and bounded
//! batch registration. The managers own no state beyond their collaborators:
//!
//! - **repository**: user lookup and persistence
//! - **security**: password verification
//! - **audit**: attempt and outcome records
//! - **events**: `UserLoggedIn` notifications
//! - **service**: `LoginManager` and `MembershipManager`
//! - **container**: builder and configuration-driven wiring
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use domain::User;
//! use membership_service::audit::MemoryAuditLog;
//! use membership_service::events::BroadcastEventEmitter;
//! use membership_service::repository::{InMemoryUserStore, UserRepository};
//! use membership_service::security::HashingPasswordChecker;
//! use membership_service::MembershipManager;
//!
//! let checker: HashingPasswordChecker = HashingPasswordChecker::default();
//! let store = InMemoryUserStore::new();
//! store
//!     .create_user(&User::with_password("alice", "pw1", checker.hasher()).unwrap())
//!     .unwrap();
//!
//! let manager = MembershipManager::with_audit_log(
//!     Arc::new(store),
//!     Arc::new(checker),
//!     Arc::new(BroadcastEventEmitter::default()),
//!     Arc::new(MemoryAuditLog::new()),
//! );
//!
//! assert!(manager.try_login(Some("alice"), Some("pw1")).unwrap());
//! assert!(!manager.try_login(Some("alice"), Some("wrong")).unwrap());
//! ```

pub mod audit;
pub mod config;
pub mod container;
pub mod events;
pub mod repository;
pub mod security;
pub mod service;

pub use common::{MembershipError, MembershipResult};
pub use config::{AuditSink, ConfigError, MembershipConfig};
pub use container::{MembershipBuilder, Services};
pub use service::{LoginManager, MembershipManager};
