//! User entity and repository trait.
//!
//! Maps to the `users` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a user account in the prediction pools application.
///
/// Maps to the `users` table:
/// - id: BIGINT PRIMARY KEY
/// - email: VARCHAR(255) NOT NULL UNIQUE
/// - nickname: VARCHAR(20) NULL UNIQUE
/// - created_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - updated_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Primary key. `0` means the record has not been persisted.
    pub id: i64,

    /// Email address (not validated here)
    pub email: String,

    /// Display nickname, claimed once
    pub nickname: Option<String>,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check whether the user has already claimed a nickname.
    ///
    /// An empty string counts as unclaimed.
    pub fn has_nickname(&self) -> bool {
        self.nickname.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Check whether the id refers to a persisted record.
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

impl Default for User {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            email: String::new(),
            nickname: None,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Repository trait for User data access operations.
///
/// Implementations of this trait handle the actual database interactions.
/// The trait is defined in the domain layer to maintain dependency inversion.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;

    /// Update an existing user.
    ///
    /// Returns [`AppError::Conflict`] when the nickname is already held by
    /// another user.
    async fn update(&self, user: &User) -> Result<User, AppError>;
}
