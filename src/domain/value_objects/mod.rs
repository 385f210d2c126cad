//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! - **Identity**: The authenticated caller and their role claims

mod identity;

pub use identity::*;
