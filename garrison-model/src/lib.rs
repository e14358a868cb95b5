//! Core data model definitions shared across Garrison crates.
#![allow(missing_docs)]

pub mod base;
pub mod ids;
pub mod requests;
pub mod role;
pub mod user;

// Intentionally curated re-exports for downstream consumers.
pub use base::Base;
pub use ids::{BaseId, UserId};
pub use requests::{CreateUserRequest, UpdateUserRequest};
pub use role::Role;
pub use user::{User, UserStatus};
