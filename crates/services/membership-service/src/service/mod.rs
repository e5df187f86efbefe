//! Membership business logic.
//!
//! Both managers run the same login flow. `MembershipManager` additionally
//! raises `UserLoggedIn` and registers users in bounded batches.

mod login_flow;
mod login_manager;
mod membership_manager;

pub use login_manager::LoginManager;
pub use membership_manager::MembershipManager;
