//! Repository for the `comments` table.

use sqlx::{PgExecutor, PgPool};
use feed_core::types::DbId;

use crate::models::comment::{Comment, CreateComment, ThreadCommentRow};

/// Column list for comments queries.
const COLUMNS: &str = "id, post_id, author_id, parent_id, content, created_at, updated_at";

/// Provides comment inserts, lookups, and the flat thread fetch.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    ///
    /// The `(parent_id, post_id)` foreign key rejects a parent on another
    /// post even if the caller skipped validation.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateComment,
    ) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (post_id, author_id, parent_id, content)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(input.post_id)
            .bind(author_id)
            .bind(input.parent_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a comment by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch every comment of a post as one flat list, oldest first.
    ///
    /// Author name, like count, and whether `viewer_id` liked each comment
    /// come from the same query, so building the thread needs no further
    /// round trips.
    pub async fn list_thread<'e>(
        executor: impl PgExecutor<'e>,
        post_id: DbId,
        viewer_id: Option<DbId>,
    ) -> Result<Vec<ThreadCommentRow>, sqlx::Error> {
        sqlx::query_as::<_, ThreadCommentRow>(
            "SELECT c.id, c.post_id, c.parent_id, c.author_id,
                    u.username AS author_username, c.content, c.created_at,
                    COUNT(l.id) AS like_count,
                    COALESCE(BOOL_OR(l.user_id = $2), false) AS user_has_liked
             FROM comments c
             JOIN users u ON u.id = c.author_id
             LEFT JOIN likes l ON l.comment_id = c.id
             WHERE c.post_id = $1
             GROUP BY c.id, u.username
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(post_id)
        .bind(viewer_id)
        .fetch_all(executor)
        .await
    }
}
