//! Invitation Service
//!
//! Handles a user's response to a prediction pool invitation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;

use crate::domain::{MembershipStatus, PoolMembership, PoolMembershipRepository};
use crate::shared::error::AppError;

/// Invitation service trait defining invitation operations.
#[async_trait]
pub trait InvitationService: Send + Sync {
    /// Accept or dismiss a pending invitation.
    ///
    /// Only memberships in the `Invited` state are changed. A missing
    /// membership, or one that was already answered, yields
    /// [`InviteOutcome::NotInvited`] without touching the repository.
    async fn accept_or_dismiss_invite(
        &self,
        membership: Option<&mut PoolMembership>,
        accept: bool,
    ) -> Result<InviteOutcome, InvitationError>;
}

/// Result of responding to an invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InviteOutcome {
    NotInvited,
    Accepted,
    Dismissed,
}

impl InviteOutcome {
    /// Human-readable message for the caller.
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotInvited => "You are not invited to this pool",
            Self::Accepted => "Accepted invite to the pool",
            Self::Dismissed => "Dismissed invite to the pool",
        }
    }
}

impl std::fmt::Display for InviteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Invitation service errors.
#[derive(Debug, thiserror::Error)]
pub enum InvitationError {
    #[error(transparent)]
    Repository(#[from] AppError),
}

impl From<InvitationError> for AppError {
    fn from(err: InvitationError) -> Self {
        match err {
            InvitationError::Repository(e) => e,
        }
    }
}

/// Invitation service implementation.
pub struct InvitationServiceImpl<M>
where
    M: PoolMembershipRepository + ?Sized,
{
    membership_repo: Arc<M>,
}

impl<M> InvitationServiceImpl<M>
where
    M: PoolMembershipRepository + ?Sized,
{
    /// Create a new InvitationServiceImpl.
    pub fn new(membership_repo: Arc<M>) -> Self {
        Self { membership_repo }
    }
}

#[async_trait]
impl<M> InvitationService for InvitationServiceImpl<M>
where
    M: PoolMembershipRepository + ?Sized + 'static,
{
    #[tracing::instrument(skip(self, membership), level = "debug")]
    async fn accept_or_dismiss_invite(
        &self,
        membership: Option<&mut PoolMembership>,
        accept: bool,
    ) -> Result<InviteOutcome, InvitationError> {
        let membership = match membership {
            Some(m) if m.is_pending_invite() => m,
            Some(m) => {
                tracing::debug!(
                    pool_id = m.pool_id,
                    user_id = m.user_id,
                    status = %m.status,
                    "Invitation already answered"
                );
                return Ok(InviteOutcome::NotInvited);
            }
            None => {
                tracing::debug!("No membership to respond to");
                return Ok(InviteOutcome::NotInvited);
            }
        };

        let (status, outcome) = if accept {
            (MembershipStatus::Accepted, InviteOutcome::Accepted)
        } else {
            (MembershipStatus::Dismissed, InviteOutcome::Dismissed)
        };

        membership.status = status;
        membership.responded_at = Some(Utc::now());

        self.membership_repo.update(membership).await?;

        tracing::info!(
            pool_id = membership.pool_id,
            user_id = membership.user_id,
            status = %membership.status,
            "Invitation answered"
        );

        Ok(outcome)
    }
}
