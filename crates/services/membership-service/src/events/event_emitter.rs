//! Event emitter contract and in-process implementations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use uuid::Uuid;

use domain::DomainResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Default buffer size for the broadcast emitter
pub const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Publishes membership notifications.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait EventEmitter: Send + Sync {
    /// Announce that a user logged in successfully
    fn emit_user_logged_in(&self, login: &str) -> DomainResult<()>;
}

/// Raised once per successful membership login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLoggedIn {
    pub id: Uuid,
    pub login: String,
    pub occurred_at: DateTime<Utc>,
}

impl UserLoggedIn {
    /// Create an event stamped with the current time
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            login: login.into(),
            occurred_at: Utc::now(),
        }
    }
}

/// In-process emitter that fans `UserLoggedIn` events out to subscribers.
///
/// Sending never blocks. Slow subscribers lag and lose the oldest events;
/// publishing with no subscribers is not an error.
#[derive(Debug, Clone)]
pub struct BroadcastEventEmitter {
    sender: broadcast::Sender<UserLoggedIn>,
}

impl BroadcastEventEmitter {
    /// Create an emitter buffering up to `capacity` events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Receive every event published after this call
    pub fn subscribe(&self) -> broadcast::Receiver<UserLoggedIn> {
        self.sender.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastEventEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

impl EventEmitter for BroadcastEventEmitter {
    fn emit_user_logged_in(&self, login: &str) -> DomainResult<()> {
        match self.sender.send(UserLoggedIn::new(login)) {
            Ok(receivers) => tracing::debug!(login = %login, receivers, "UserLoggedIn published"),
            Err(_) => tracing::debug!(login = %login, "UserLoggedIn dropped, no subscribers"),
        }
        Ok(())
    }
}

/// Emitter that discards every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEventEmitter;

impl EventEmitter for NullEventEmitter {
    fn emit_user_logged_in(&self, _login: &str) -> DomainResult<()> {
        Ok(())
    }
}
