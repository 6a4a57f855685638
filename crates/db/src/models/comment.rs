//! Comment models, DTOs, and the flat thread row used for tree assembly.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use feed_core::comment_tree::ThreadedComment;
use feed_core::types::{DbId, Timestamp};

use crate::models::user::UserSummary;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A row from the `comments` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Comment {
    pub id: DbId,
    pub post_id: DbId,
    pub author_id: DbId,
    pub parent_id: Option<DbId>,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// Create DTO
// ---------------------------------------------------------------------------

/// Input for creating a comment. `parent_id` is `None` for a top-level comment.
#[derive(Debug, Deserialize)]
pub struct CreateComment {
    pub post_id: DbId,
    pub parent_id: Option<DbId>,
    pub content: String,
}

// ---------------------------------------------------------------------------
// Thread read model
// ---------------------------------------------------------------------------

/// One comment of a post's thread, author-joined and like-counted.
#[derive(Debug, Clone, FromRow)]
pub struct ThreadCommentRow {
    pub id: DbId,
    pub post_id: DbId,
    pub parent_id: Option<DbId>,
    pub author_id: DbId,
    pub author_username: String,
    pub content: String,
    pub created_at: Timestamp,
    pub like_count: i64,
    pub user_has_liked: bool,
}

/// A thread comment as returned to API clients (without its replies).
#[derive(Debug, Clone, Serialize)]
pub struct ThreadComment {
    pub id: DbId,
    pub post_id: DbId,
    pub parent_id: Option<DbId>,
    pub author: UserSummary,
    pub content: String,
    pub created_at: Timestamp,
    pub like_count: i64,
    pub user_has_liked: bool,
}

impl From<ThreadCommentRow> for ThreadComment {
    fn from(row: ThreadCommentRow) -> Self {
        Self {
            id: row.id,
            post_id: row.post_id,
            parent_id: row.parent_id,
            author: UserSummary {
                id: row.author_id,
                username: row.author_username,
            },
            content: row.content,
            created_at: row.created_at,
            like_count: row.like_count,
            user_has_liked: row.user_has_liked,
        }
    }
}

impl ThreadedComment for ThreadComment {
    fn id(&self) -> DbId {
        self.id
    }

    fn parent_id(&self) -> Option<DbId> {
        self.parent_id
    }
}
