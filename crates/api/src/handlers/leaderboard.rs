//! Handler for the 24-hour karma leaderboard.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use feed_core::karma::clamp_leaderboard_size;
use feed_db::models::karma::LeaderboardEntry;
use feed_db::repositories::KarmaRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the leaderboard (`?limit=`).
#[derive(Debug, Deserialize)]
pub struct LeaderboardParams {
    pub limit: Option<i64>,
}

/// GET /api/v1/leaderboard/top
///
/// Top users by karma earned in the configured window ending now. Computed
/// from the like history on every call.
pub async fn top(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> AppResult<Json<DataResponse<Vec<LeaderboardEntry>>>> {
    let limit = clamp_leaderboard_size(params.limit);
    let entries = KarmaRepo::top(&state.pool, &state.config.karma, Utc::now(), limit).await?;
    Ok(Json(DataResponse { data: entries }))
}
