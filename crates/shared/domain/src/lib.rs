//! Domain layer - Membership entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The membership service builds its login and registration flows on these types.

pub mod constants;
pub mod error;
pub mod password;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::{Argon2Hasher, HashedPassword, PasswordHasher};
pub use user::User;
