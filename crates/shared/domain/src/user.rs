//! User domain entity.

use crate::error::DomainResult;
use crate::password::PasswordHasher;

/// User domain entity
///
/// Carries the login plus everything a password checker needs to reach a
/// verdict without further I/O. The login cannot change once set.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    login: String,
    password_hash: String,
    password_salt: String,
}

// Don't expose credential material in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("login", &self.login)
            .field("password_hash", &"[REDACTED]")
            .field("password_salt", &"[REDACTED]")
            .finish()
    }
}

impl User {
    /// Create a user from stored credential material.
    ///
    /// No field is validated; stores decide what they accept.
    pub fn new(
        login: impl Into<String>,
        password_hash: impl Into<String>,
        password_salt: impl Into<String>,
    ) -> Self {
        Self {
            login: login.into(),
            password_hash: password_hash.into(),
            password_salt: password_salt.into(),
        }
    }

    /// Create a user by hashing a plain text password with a fresh salt.
    pub fn with_password(
        login: impl Into<String>,
        password: &str,
        hasher: &dyn PasswordHasher,
    ) -> DomainResult<Self> {
        let (hash, salt) = hasher.hash_new_password(password)?.into_parts();
        Ok(Self::new(login, hash, salt))
    }

    /// Login name used to look the user up
    pub fn login(&self) -> &str {
        &self.login
    }

    /// Stored password digest
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Stored password salt
    pub fn password_salt(&self) -> &str {
        &self.password_salt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::Argon2Hasher;

    #[test]
    fn test_with_password_stores_hash_and_salt() {
        let hasher = Argon2Hasher::new();
        let user = User::with_password("alice", "pw1", &hasher).unwrap();

        assert_eq!(user.login(), "alice");
        assert_ne!(user.password_hash(), "pw1");
        assert!(hasher
            .verify("pw1", user.password_hash(), user.password_salt())
            .unwrap());
    }

    #[test]
    fn test_blank_user_is_allowed() {
        let user = User::new("", "", "");
        assert_eq!(user.login(), "");
    }

    #[test]
    fn test_debug_hides_credentials() {
        let user = User::new("alice", "digest", "pepper");
        let debug = format!("{:?}", user);

        assert!(debug.contains("alice"));
        assert!(!debug.contains("digest"));
        assert!(!debug.contains("pepper"));
    }
}
