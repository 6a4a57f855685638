//! Leaderboard read model.

use serde::Serialize;
use sqlx::FromRow;
use feed_core::types::DbId;

/// One leaderboard row: a user and the karma they earned inside the window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct LeaderboardEntry {
    pub user_id: DbId,
    pub username: String,
    pub karma: i64,
}
