//! Like models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use feed_core::likes::LikeTarget;
use feed_core::types::{DbId, Timestamp};

/// A row from the `likes` table. Exactly one of `post_id` / `comment_id` is set.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Like {
    pub id: DbId,
    pub user_id: DbId,
    pub post_id: Option<DbId>,
    pub comment_id: Option<DbId>,
    pub created_at: Timestamp,
}

impl Like {
    /// The typed target of this like.
    pub fn target(&self) -> Option<LikeTarget> {
        LikeTarget::from_parts(self.post_id, self.comment_id).ok()
    }
}

/// Request body for the toggle endpoint: exactly one id must be given.
#[derive(Debug, Deserialize)]
pub struct ToggleLikeRequest {
    pub post_id: Option<DbId>,
    pub comment_id: Option<DbId>,
}
