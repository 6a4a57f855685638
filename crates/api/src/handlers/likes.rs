//! Handler for the like toggle.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use feed_core::likes::{LikeTarget, ToggleOutcome};
use feed_db::models::like::ToggleLikeRequest;
use feed_db::repositories::LikeRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for a committed toggle.
#[derive(Debug, Serialize)]
pub struct ToggleResponse {
    pub status: ToggleOutcome,
    pub target: LikeTarget,
}

/// POST /api/v1/likes/toggle
///
/// Like or unlike a post or comment. Returns 201 when a like was added and
/// 200 when one was removed. A lost race against a concurrent toggle is
/// reported as 409 so the client can retry; it is never turned into success.
pub async fn toggle_like(
    State(state): State<AppState>,
    auth: AuthUser,
    AppJson(body): AppJson<ToggleLikeRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ToggleResponse>>)> {
    let target = LikeTarget::from_parts(body.post_id, body.comment_id)?;

    let outcome = LikeRepo::toggle(&state.pool, auth.user_id, target).await?;

    tracing::info!(
        user_id = auth.user_id,
        %target,
        outcome = outcome.as_str(),
        "Like toggled"
    );

    let status = match outcome {
        ToggleOutcome::Liked => StatusCode::CREATED,
        ToggleOutcome::Unliked => StatusCode::OK,
    };

    Ok((
        status,
        Json(DataResponse {
            data: ToggleResponse {
                status: outcome,
                target,
            },
        }),
    ))
}
