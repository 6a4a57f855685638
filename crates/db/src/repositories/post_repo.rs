//! Repository for the `posts` table.

use sqlx::{PgExecutor, PgPool};
use feed_core::types::DbId;

use crate::models::post::{CreatePost, Post, PostStatsRow};

/// Column list for posts queries.
const COLUMNS: &str = "id, author_id, content, created_at, updated_at";

/// Post row joined with author and counts. `$1` is the viewing user (nullable).
const STATS_SELECT: &str = "SELECT p.id, p.author_id, u.username AS author_username,
        p.content, p.created_at,
        (SELECT COUNT(*) FROM likes l WHERE l.post_id = p.id) AS like_count,
        (SELECT COUNT(*) FROM comments c WHERE c.post_id = p.id) AS comment_count,
        EXISTS (
            SELECT 1 FROM likes l WHERE l.post_id = p.id AND l.user_id = $1
        ) AS user_has_liked
     FROM posts p
     JOIN users u ON u.id = p.author_id";

/// Provides creation and read models for posts.
pub struct PostRepo;

impl PostRepo {
    /// Insert a new post, returning the created row.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreatePost,
    ) -> Result<Post, sqlx::Error> {
        let query = format!(
            "INSERT INTO posts (author_id, content)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Post>(&query)
            .bind(author_id)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a post by primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Post>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM posts WHERE id = $1");
        sqlx::query_as::<_, Post>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every post newest first, with author and counts, in one query.
    pub async fn list_with_stats(
        pool: &PgPool,
        viewer_id: Option<DbId>,
    ) -> Result<Vec<PostStatsRow>, sqlx::Error> {
        let query = format!("{STATS_SELECT} ORDER BY p.created_at DESC, p.id DESC");
        sqlx::query_as::<_, PostStatsRow>(&query)
            .bind(viewer_id)
            .fetch_all(pool)
            .await
    }

    /// Fetch one post with author and counts.
    pub async fn find_with_stats<'e>(
        executor: impl PgExecutor<'e>,
        id: DbId,
        viewer_id: Option<DbId>,
    ) -> Result<Option<PostStatsRow>, sqlx::Error> {
        let query = format!("{STATS_SELECT} WHERE p.id = $2");
        sqlx::query_as::<_, PostStatsRow>(&query)
            .bind(viewer_id)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
