//! Password hashing - stored credential material for users.
//!
//! The membership core never hashes anything itself; it only asks a
//! `PasswordChecker` for a verdict. This module supplies the hashing strategy
//! that registration flows and the hash-backed checker share.

use argon2::{
    password_hash::{rand_core::OsRng, Output, PasswordHasher as _, SaltString},
    Argon2,
};

use crate::error::{DomainError, DomainResult};

/// Hash and salt pair produced for a new password.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
    salt: String,
}

// Don't expose credential material in debug output
impl std::fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[REDACTED]")
            .field("salt", &"[REDACTED]")
            .finish()
    }
}

impl HashedPassword {
    /// Wrap an existing hash and salt (e.g. loaded from storage).
    pub fn new(hash: impl Into<String>, salt: impl Into<String>) -> Self {
        Self {
            hash: hash.into(),
            salt: salt.into(),
        }
    }

    /// Get the hash string for storage.
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Get the salt string for storage.
    pub fn salt(&self) -> &str {
        &self.salt
    }

    /// Consume and return `(hash, salt)`.
    pub fn into_parts(self) -> (String, String) {
        (self.hash, self.salt)
    }
}

/// Password hashing strategy.
///
/// Hashes are stored next to their salt, so a check only needs the user
/// record and the candidate password.
pub trait PasswordHasher: Send + Sync {
    /// Hash a new password with a freshly generated salt.
    fn hash_new_password(&self, password: &str) -> DomainResult<HashedPassword>;

    /// Hash a password with an existing salt.
    fn hash_password_with_salt(&self, password: &str, salt: &str) -> DomainResult<String>;

    /// Check a password against a stored hash and salt.
    ///
    /// Implementations must compare in constant time.
    fn verify(&self, password: &str, hash: &str, salt: &str) -> DomainResult<bool>;
}

/// Argon2id hasher with the crate's default parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    /// Create a new hasher
    pub fn new() -> Self {
        Self
    }

    fn derive(&self, password: &str, salt: &SaltString) -> DomainResult<Output> {
        let parsed = Self::argon2()
            .hash_password(password.as_bytes(), salt)
            .map_err(|e| DomainError::password(format!("Password hash failed: {}", e)))?;
        parsed
            .hash
            .ok_or_else(|| DomainError::password("Password hash produced no output"))
    }

    fn parse_salt(salt: &str) -> DomainResult<SaltString> {
        SaltString::from_b64(salt)
            .map_err(|e| DomainError::password(format!("Invalid salt: {}", e)))
    }

    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash_new_password(&self, password: &str) -> DomainResult<HashedPassword> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.derive(password, &salt)?;
        Ok(HashedPassword::new(hash.to_string(), salt.as_str()))
    }

    fn hash_password_with_salt(&self, password: &str, salt: &str) -> DomainResult<String> {
        let salt = Self::parse_salt(salt)?;
        Ok(self.derive(password, &salt)?.to_string())
    }

    /// Compares the decoded outputs, which is constant-time.
    /// A stored hash that cannot be decoded never matches.
    fn verify(&self, password: &str, hash: &str, salt: &str) -> DomainResult<bool> {
        let stored = match Output::b64_decode(hash) {
            Ok(output) => output,
            Err(_) => return Ok(false),
        };
        let salt = Self::parse_salt(salt)?;
        let candidate = self.derive(password, &salt)?;
        Ok(candidate == stored)
    }
}
