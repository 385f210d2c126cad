//! Pool membership entity and repository trait.
//!
//! Maps to the `pool_memberships` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Membership status stored as a SMALLINT flag.
///
/// `Invited` is the only actionable state; `Accepted` and `Dismissed` are
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MembershipStatus {
    #[default]
    Invited,
    Accepted,
    Dismissed,
}

impl MembershipStatus {
    /// Convert from the database flag value.
    pub fn from_flag(flag: i16) -> Option<Self> {
        match flag {
            0 => Some(Self::Invited),
            1 => Some(Self::Accepted),
            2 => Some(Self::Dismissed),
            _ => None,
        }
    }

    /// Convert to the database flag value.
    pub fn as_flag(&self) -> i16 {
        match self {
            Self::Invited => 0,
            Self::Accepted => 1,
            Self::Dismissed => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invited => "invited",
            Self::Accepted => "accepted",
            Self::Dismissed => "dismissed",
        }
    }

    /// Check if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Accepted | Self::Dismissed)
    }
}

impl std::fmt::Display for MembershipStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a user's membership (or pending invitation) in a prediction pool.
///
/// Maps to the `pool_memberships` table:
/// - pool_id: BIGINT NOT NULL (composite PK)
/// - user_id: BIGINT NOT NULL REFERENCES users(id) (composite PK)
/// - status: SMALLINT NOT NULL DEFAULT 0
/// - invited_at: TIMESTAMPTZ NOT NULL DEFAULT NOW()
/// - responded_at: TIMESTAMPTZ NULL
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolMembership {
    /// Pool ID (part of composite primary key)
    pub pool_id: i64,

    /// User ID (part of composite primary key)
    pub user_id: i64,

    /// Current invitation/membership state
    pub status: MembershipStatus,

    /// When the invitation was issued
    pub invited_at: DateTime<Utc>,

    /// When the invitee accepted or dismissed the invitation
    pub responded_at: Option<DateTime<Utc>>,
}

impl PoolMembership {
    /// Create a pending invitation for a user.
    pub fn invited(pool_id: i64, user_id: i64) -> Self {
        Self {
            pool_id,
            user_id,
            status: MembershipStatus::Invited,
            invited_at: Utc::now(),
            responded_at: None,
        }
    }

    /// Check whether the invitation can still be answered.
    pub fn is_pending_invite(&self) -> bool {
        !self.status.is_terminal()
    }
}

/// Repository trait for PoolMembership data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PoolMembershipRepository: Send + Sync {
    /// Find the membership of a user in a pool.
    async fn find(&self, pool_id: i64, user_id: i64) -> Result<Option<PoolMembership>, AppError>;

    /// Persist a membership's status change.
    async fn update(&self, membership: &PoolMembership) -> Result<PoolMembership, AppError>;
}
