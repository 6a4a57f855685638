//! Post models and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use feed_core::types::{DbId, Timestamp};

use crate::models::user::UserSummary;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `posts` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Post {
    pub id: DbId,
    pub author_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for creating a post. The author comes from the authenticated user.
#[derive(Debug, Deserialize)]
pub struct CreatePost {
    pub content: String,
}

// ---------------------------------------------------------------------------
// Read models
// ---------------------------------------------------------------------------

/// A post joined with its author and like/comment counts, as one flat row.
#[derive(Debug, Clone, FromRow)]
pub struct PostStatsRow {
    pub id: DbId,
    pub author_id: DbId,
    pub author_username: String,
    pub content: String,
    pub created_at: Timestamp,
    pub like_count: i64,
    pub comment_count: i64,
    pub user_has_liked: bool,
}

/// A post as returned to API clients.
#[derive(Debug, Clone, Serialize)]
pub struct PostWithStats {
    pub id: DbId,
    pub author: UserSummary,
    pub content: String,
    pub created_at: Timestamp,
    pub like_count: i64,
    pub comment_count: i64,
    pub user_has_liked: bool,
}

impl From<PostStatsRow> for PostWithStats {
    fn from(row: PostStatsRow) -> Self {
        Self {
            id: row.id,
            author: UserSummary {
                id: row.author_id,
                username: row.author_username,
            },
            content: row.content,
            created_at: row.created_at,
            like_count: row.like_count,
            comment_count: row.comment_count,
            user_has_liked: row.user_has_liked,
        }
    }
}
