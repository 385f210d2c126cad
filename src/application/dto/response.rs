//! Response DTOs
//!
//! Data structures for API response bodies.

use serde::Serialize;

use crate::application::services::InviteOutcome;
use crate::domain::User;

/// Invitation response
#[derive(Debug, Serialize)]
pub struct InviteResponse {
    pub outcome: InviteOutcome,
    pub message: String,
}

impl From<InviteOutcome> for InviteResponse {
    fn from(outcome: InviteOutcome) -> Self {
        Self {
            outcome,
            message: outcome.to_string(),
        }
    }
}

/// Claimed nickname response
#[derive(Debug, Serialize)]
pub struct NicknameResponse {
    pub user_id: String,
    pub nickname: Option<String>,
}

impl From<User> for NicknameResponse {
    fn from(user: User) -> Self {
        Self {
            user_id: user.id.to_string(),
            nickname: user.nickname,
        }
    }
}
