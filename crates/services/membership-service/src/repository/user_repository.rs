//! User repository contract and an in-memory store.

use std::collections::HashMap;
use std::sync::RwLock;

use domain::{DomainError, DomainResult, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Users returned by `get_existing_user` must carry their full credential
/// material so a password checker needs no further lookups.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserRepository: Send + Sync {
    /// Find a user by login
    fn get_existing_user(&self, login: &str) -> DomainResult<Option<User>>;

    /// Persist a new user
    fn create_user(&self, user: &User) -> DomainResult<()>;
}

#[derive(Default)]
struct Inner {
    users: Vec<User>,
    by_login: HashMap<String, usize>,
}

/// Process-local user store.
///
/// Keeps users in insertion order and rejects duplicate logins.
#[derive(Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with users.
    ///
    /// Fails on the first duplicate login.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> DomainResult<Self> {
        let store = Self::new();
        for user in users {
            store.create_user(&user)?;
        }
        Ok(store)
    }

    /// Snapshot of every stored user, in insertion order
    pub fn users(&self) -> DomainResult<Vec<User>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| DomainError::internal("User store lock poisoned"))?;
        Ok(inner.users.clone())
    }

    /// Number of stored users
    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.users.len()).unwrap_or(0)
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserRepository for InMemoryUserStore {
    fn get_existing_user(&self, login: &str) -> DomainResult<Option<User>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| DomainError::internal("User store lock poisoned"))?;

        Ok(inner
            .by_login
            .get(login)
            .map(|&index| inner.users[index].clone()))
    }

    fn create_user(&self, user: &User) -> DomainResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| DomainError::internal("User store lock poisoned"))?;

        if inner.by_login.contains_key(user.login()) {
            return Err(DomainError::conflict(format!("User '{}'", user.login())));
        }

        let index = inner.users.len();
        inner.by_login.insert(user.login().to_string(), index);
        inner.users.push(user.clone());

        tracing::debug!(login = %user.login(), "User stored");
        Ok(())
    }
}
