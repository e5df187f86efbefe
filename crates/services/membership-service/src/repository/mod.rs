//! Repository layer - User lookup and persistence.

mod user_repository;

pub use user_repository::{InMemoryUserStore, UserRepository};

// Export mock for tests
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
