//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **InvitationService**: Accepting or dismissing pool invitations
//! - **NicknameService**: One-time nickname claims

pub mod invitation_service;
pub mod nickname_service;

// Re-export invitation service types
pub use invitation_service::{
    InvitationError, InvitationService, InvitationServiceImpl, InviteOutcome,
};

// Re-export nickname service types
pub use nickname_service::{NicknameError, NicknameService, NicknameServiceImpl};
