//! # Domain Services
//!
//! Domain services encapsulate business rules that don't naturally belong
//! to a single entity.
//!
//! ## Services
//!
//! - **NicknamePolicy**: Nickname length and character-set rules

mod nickname_policy;

pub use nickname_policy::*;
