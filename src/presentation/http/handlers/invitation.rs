//! Invitation Handlers

use axum::{
    extract::{Extension, Path, State},
    Json,
};

use crate::application::dto::request::RespondToInviteRequest;
use crate::application::dto::response::InviteResponse;
use crate::domain::Identity;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Accept or dismiss the caller's invitation to a pool
pub async fn respond_to_invite(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(pool_id): Path<i64>,
    Json(body): Json<RespondToInviteRequest>,
) -> Result<Json<InviteResponse>, AppError> {
    let mut membership = state.memberships.find(pool_id, identity.user_id).await?;

    let outcome = state
        .invitations
        .accept_or_dismiss_invite(membership.as_mut(), body.accept)
        .await?;

    Ok(Json(InviteResponse::from(outcome)))
}
