//! # Domain Entities
//!
//! Core domain entities representing the main business objects.
//! All entities map directly to their corresponding database tables.
//!
//! - **User**: User account with its one-time nickname
//! - **PoolMembership**: A user's invitation to, or membership in, a prediction pool
//!
//! ## Repository Traits
//!
//! Each entity has an associated repository trait defining data access operations.
//! These traits are implemented in the infrastructure layer, following the
//! dependency inversion principle.

mod user;
mod pool_membership;

// Re-export User entity and related types
pub use user::{User, UserRepository};

// Re-export PoolMembership entity and related types
pub use pool_membership::{MembershipStatus, PoolMembership, PoolMembershipRepository};

#[cfg(test)]
pub use user::MockUserRepository;

#[cfg(test)]
pub use pool_membership::MockPoolMembershipRepository;
