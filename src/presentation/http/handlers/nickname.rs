//! Nickname Handlers

use axum::{
    extract::{Extension, State},
    Json,
};

use crate::application::dto::request::ClaimNicknameRequest;
use crate::application::dto::response::NicknameResponse;
use crate::domain::{Identity, User};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Claim a nickname for the authenticated user
pub async fn claim_nickname(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Json(body): Json<ClaimNicknameRequest>,
) -> Result<Json<NicknameResponse>, AppError> {
    let candidate = User {
        id: identity.user_id,
        nickname: body.nickname,
        ..User::default()
    };

    let claimed = state
        .nicknames
        .verify_readiness_to_set_nickname(Some(&candidate), &identity)
        .await?;

    if !claimed {
        return Err(AppError::BadRequest("Not eligible to set a nickname".into()));
    }

    Ok(Json(NicknameResponse::from(candidate)))
}
