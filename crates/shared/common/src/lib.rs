//! Common utilities shared by the membership crates.
//!
//! This crate provides:
//! - The core error type and its result alias
//! - Base service configuration
//! - Tracing subscriber setup

pub mod config;
pub mod error;
pub mod telemetry;

pub use config::*;
pub use error::{MembershipError, MembershipResult, RequiredExt};
pub use telemetry::init_tracing;
