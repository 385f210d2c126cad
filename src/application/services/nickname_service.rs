//! Nickname Service
//!
//! Handles the one-time claim of a user's display nickname.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Identity, NicknamePolicy, NicknameRuleViolation, User, UserRepository};
use crate::shared::error::AppError;

/// Nickname service trait
#[async_trait]
pub trait NicknameService: Send + Sync {
    /// Check that `candidate` may claim the nickname it carries, then claim it.
    ///
    /// Returns `Ok(false)` when the candidate is missing, unsaved, carries no
    /// nickname, or does not exist in storage. A stored user that already has
    /// a nickname is a caller error and returns [`NicknameError::Ineligible`].
    ///
    /// `identity` does not affect the outcome yet; no authorization check is
    /// performed against it.
    async fn verify_readiness_to_set_nickname(
        &self,
        candidate: Option<&User>,
        identity: &Identity,
    ) -> Result<bool, NicknameError>;

    /// Validate `nickname` and persist it on `user`.
    async fn update_nickname(&self, user: &mut User, nickname: &str) -> Result<User, NicknameError>;
}

/// Nickname service errors
#[derive(Debug, thiserror::Error)]
pub enum NicknameError {
    /// The user is not allowed to claim a nickname.
    #[error("Not eligible to set a nickname: {0}")]
    Ineligible(String),

    #[error("Invalid nickname: {0}")]
    InvalidNickname(#[from] NicknameRuleViolation),

    /// Storage rejected the nickname as a duplicate.
    #[error("Nickname already taken")]
    NicknameTaken,

    #[error(transparent)]
    Repository(AppError),
}

impl From<AppError> for NicknameError {
    fn from(err: AppError) -> Self {
        if err.is_conflict() {
            NicknameError::NicknameTaken
        } else {
            NicknameError::Repository(err)
        }
    }
}

impl From<NicknameError> for AppError {
    fn from(err: NicknameError) -> Self {
        match err {
            NicknameError::Ineligible(reason) => AppError::BadRequest(reason),
            NicknameError::InvalidNickname(rule) => AppError::Validation(rule.to_string()),
            NicknameError::NicknameTaken => AppError::Conflict("Nickname already taken".into()),
            NicknameError::Repository(e) => e,
        }
    }
}

/// NicknameService implementation
pub struct NicknameServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    user_repo: Arc<U>,
    policy: NicknamePolicy,
}

impl<U> NicknameServiceImpl<U>
where
    U: UserRepository + ?Sized,
{
    pub fn new(user_repo: Arc<U>, policy: NicknamePolicy) -> Self {
        Self { user_repo, policy }
    }
}

#[async_trait]
impl<U> NicknameService for NicknameServiceImpl<U>
where
    U: UserRepository + ?Sized + 'static,
{
    #[tracing::instrument(skip_all, fields(caller = identity.user_id), level = "debug")]
    async fn verify_readiness_to_set_nickname(
        &self,
        candidate: Option<&User>,
        identity: &Identity,
    ) -> Result<bool, NicknameError> {
        let Some(candidate) = candidate else {
            tracing::debug!("No candidate user");
            return Ok(false);
        };

        if !candidate.is_persisted() {
            tracing::debug!(user_id = candidate.id, "Candidate user is not persisted");
            return Ok(false);
        }

        let desired = match candidate.nickname.as_deref() {
            Some(n) if !n.is_empty() => n,
            _ => {
                tracing::debug!(user_id = candidate.id, "Candidate carries no nickname");
                return Ok(false);
            }
        };

        // Only the write can conflict; a lookup error passes through as-is.
        let stored = self
            .user_repo
            .find_by_id(candidate.id)
            .await
            .map_err(NicknameError::Repository)?;

        let Some(mut stored) = stored else {
            tracing::debug!(user_id = candidate.id, "User not found");
            return Ok(false);
        };

        if stored.has_nickname() {
            return Err(NicknameError::Ineligible(format!(
                "user {} already has a nickname set",
                stored.id
            )));
        }

        self.update_nickname(&mut stored, desired).await?;

        Ok(true)
    }

    #[tracing::instrument(skip(self, user), fields(user_id = user.id), level = "debug")]
    async fn update_nickname(&self, user: &mut User, nickname: &str) -> Result<User, NicknameError> {
        self.policy.validate(nickname)?;

        user.nickname = Some(nickname.to_string());
        user.updated_at = Utc::now();

        match self.user_repo.update(user).await {
            Ok(updated) => {
                tracing::info!(user_id = updated.id, nickname = %nickname, "Nickname claimed");
                Ok(updated)
            }
            Err(e) => {
                if e.is_conflict() {
                    tracing::warn!(user_id = user.id, nickname = %nickname, "Nickname already taken");
                }
                Err(e.into())
            }
        }
    }
}
