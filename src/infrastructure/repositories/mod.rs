//! Repository Implementations
//!
//! PostgreSQL implementations of domain repository traits.
//!
//! ## Available Repositories
//!
//! - **UserRepository** - User accounts and nickname claims
//! - **PoolMembershipRepository** - Pool invitations and memberships
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use sqlx::PgPool;
//! use crate::infrastructure::repositories::{PgPoolMembershipRepository, PgUserRepository};
//!
//! async fn setup_repositories(pool: PgPool) {
//!     let user_repo = PgUserRepository::new(pool.clone());
//!     let membership_repo = PgPoolMembershipRepository::new(pool);
//! }
//! ```

pub mod user_repository;
pub mod pool_membership_repository;

pub use user_repository::PgUserRepository;
pub use pool_membership_repository::PgPoolMembershipRepository;
