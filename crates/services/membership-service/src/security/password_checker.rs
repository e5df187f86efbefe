//! Password checker contract and a hash-backed implementation.

use domain::{Argon2Hasher, DomainResult, PasswordHasher, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Verifies a plain text password against a user's stored credential.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait PasswordChecker: Send + Sync {
    /// Returns `true` when the password matches the user's credential
    fn is_password_valid(&self, password: &str, user: &User) -> DomainResult<bool>;
}

/// Password checker that re-derives the hash with the user's stored salt.
#[derive(Debug, Clone, Default)]
pub struct HashingPasswordChecker<H = Argon2Hasher> {
    hasher: H,
}

impl<H: PasswordHasher> HashingPasswordChecker<H> {
    /// Create a checker around a hasher
    pub fn new(hasher: H) -> Self {
        Self { hasher }
    }

    /// The hasher used for verification, for registering matching users
    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

impl<H: PasswordHasher> PasswordChecker for HashingPasswordChecker<H> {
    fn is_password_valid(&self, password: &str, user: &User) -> DomainResult<bool> {
        self.hasher
            .verify(password, user.password_hash(), user.password_salt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{DomainError, HashedPassword};

    /// Reversible "hash" so tests can reason about stored values
    struct ReverseHasher;

    impl PasswordHasher for ReverseHasher {
        fn hash_new_password(&self, password: &str) -> DomainResult<HashedPassword> {
            Ok(HashedPassword::new(
                self.hash_password_with_salt(password, "s")?,
                "s",
            ))
        }

        fn hash_password_with_salt(&self, password: &str, salt: &str) -> DomainResult<String> {
            if salt.is_empty() {
                return Err(DomainError::password("empty salt"));
            }
            Ok(format!("{}{}", salt, password.chars().rev().collect::<String>()))
        }

        fn verify(&self, password: &str, hash: &str, salt: &str) -> DomainResult<bool> {
            Ok(self.hash_password_with_salt(password, salt)? == hash)
        }
    }

    /// Accepts everything, whatever the stored hash says
    struct AcceptingHasher;

    impl PasswordHasher for AcceptingHasher {
        fn hash_new_password(&self, _password: &str) -> DomainResult<HashedPassword> {
            Ok(HashedPassword::new("h", "s"))
        }

        fn hash_password_with_salt(&self, _password: &str, _salt: &str) -> DomainResult<String> {
            Ok("never-matches".to_string())
        }

        fn verify(&self, _password: &str, _hash: &str, _salt: &str) -> DomainResult<bool> {
            Ok(true)
        }
    }

    #[test]
    fn test_matching_password_is_valid() {
        let checker = HashingPasswordChecker::new(ReverseHasher);
        let user = User::new("alice", "s1wp", "s");

        assert!(checker.is_password_valid("pw1", &user).unwrap());
        assert!(!checker.is_password_valid("pw2", &user).unwrap());
    }

    #[test]
    fn test_verdict_comes_from_hasher_verify() {
        let checker = HashingPasswordChecker::new(AcceptingHasher);
        let user = User::new("alice", "stored", "s");

        assert!(checker.is_password_valid("anything", &user).unwrap());
    }

    #[test]
    fn test_argon2_checker_rejects_same_length_wrong_password() {
        let checker: HashingPasswordChecker = HashingPasswordChecker::default();
        let user = User::with_password("alice", "pw1", checker.hasher()).unwrap();

        assert!(checker.is_password_valid("pw1", &user).unwrap());
        assert!(!checker.is_password_valid("pw2", &user).unwrap());
    }

    #[test]
    fn test_hasher_errors_propagate() {
        let checker = HashingPasswordChecker::new(ReverseHasher);
        let user = User::new("alice", "s1wp", "");

        let result = checker.is_password_valid("pw1", &user);
        assert_eq!(result, Err(DomainError::password("empty salt")));
    }

    #[test]
    fn test_argon2_checker_accepts_registered_password() {
        let checker = HashingPasswordChecker::<Argon2Hasher>::default();
        let user = User::with_password("alice", "pw1", checker.hasher()).unwrap();

        assert!(checker.is_password_valid("pw1", &user).unwrap());
        assert!(!checker.is_password_valid("wrong", &user).unwrap());
        assert!(!checker.is_password_valid("", &user).unwrap());
    }
}
