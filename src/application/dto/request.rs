//! Request DTOs
//!
//! Data structures for API request bodies.

use serde::Deserialize;

/// Answer to a pool invitation
#[derive(Debug, Deserialize)]
pub struct RespondToInviteRequest {
    pub accept: bool,
}

/// Nickname claim request
#[derive(Debug, Deserialize)]
pub struct ClaimNicknameRequest {
    #[serde(default)]
    pub nickname: Option<String>,
}
