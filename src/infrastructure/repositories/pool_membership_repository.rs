//! Pool Membership Repository Implementation
//!
//! PostgreSQL implementation of the PoolMembershipRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{MembershipStatus, PoolMembership, PoolMembershipRepository};
use crate::shared::error::AppError;

/// Database row for the pool_memberships table.
#[derive(Debug, sqlx::FromRow)]
struct PoolMembershipRow {
    pool_id: i64,
    user_id: i64,
    status: i16,
    invited_at: DateTime<Utc>,
    responded_at: Option<DateTime<Utc>>,
}

impl TryFrom<PoolMembershipRow> for PoolMembership {
    type Error = AppError;

    fn try_from(row: PoolMembershipRow) -> Result<Self, Self::Error> {
        let status = MembershipStatus::from_flag(row.status).ok_or_else(|| {
            AppError::Internal(format!(
                "Unknown membership status {} for pool {} user {}",
                row.status, row.pool_id, row.user_id
            ))
        })?;

        Ok(PoolMembership {
            pool_id: row.pool_id,
            user_id: row.user_id,
            status,
            invited_at: row.invited_at,
            responded_at: row.responded_at,
        })
    }
}

/// PostgreSQL pool membership repository.
#[derive(Clone)]
pub struct PgPoolMembershipRepository {
    pool: PgPool,
}

impl PgPoolMembershipRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PoolMembershipRepository for PgPoolMembershipRepository {
    async fn find(&self, pool_id: i64, user_id: i64) -> Result<Option<PoolMembership>, AppError> {
        let row = sqlx::query_as::<_, PoolMembershipRow>(
            r#"
            SELECT pool_id, user_id, status, invited_at, responded_at
            FROM pool_memberships
            WHERE pool_id = $1 AND user_id = $2
            "#,
        )
        .bind(pool_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(PoolMembership::try_from).transpose()
    }

    async fn update(&self, membership: &PoolMembership) -> Result<PoolMembership, AppError> {
        let row = sqlx::query_as::<_, PoolMembershipRow>(
            r#"
            UPDATE pool_memberships
            SET status = $3,
                responded_at = $4
            WHERE pool_id = $1 AND user_id = $2
            RETURNING pool_id, user_id, status, invited_at, responded_at
            "#,
        )
        .bind(membership.pool_id)
        .bind(membership.user_id)
        .bind(membership.status.as_flag())
        .bind(membership.responded_at)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!(
                "Membership of user {} in pool {} not found",
                membership.user_id, membership.pool_id
            ))
        })?;

        row.try_into()
    }
}
