//! # Domain Layer
//!
//! The domain layer contains the core business rules of the prediction pools
//! application. It is independent of any external frameworks or
//! infrastructure concerns.
//!
//! ## Structure
//!
//! - **entities**: Core domain entities (User, PoolMembership) and their repository traits
//! - **value_objects**: Immutable value types (Identity)
//! - **services**: Domain services for business rules (NicknamePolicy)

pub mod entities;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use services::*;
pub use value_objects::*;
