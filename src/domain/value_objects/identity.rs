//! Authenticated caller identity.

use serde::{Deserialize, Serialize};

/// The authenticated caller, built from verified token claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// ID of the authenticated user
    pub user_id: i64,

    /// Role claims carried by the token
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Identity {
    pub fn new(user_id: i64, roles: Vec<String>) -> Self {
        Self { user_id, roles }
    }
}
